//! DailyDriftAggregator: per-day drift sums and EMA smoothing.
//!
//! Days without edits are absent from the series, not zero-filled.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeDelta, Utc};
use tracing::debug;

use driftlens_core::constants::{EMA_ALPHA, SERIES_DECIMALS};
use driftlens_core::models::{DailyDrift, EditRecord};

use crate::numeric::round_to;

/// Aggregate edits from the trailing `window_days` (ending at `now`) into a
/// daily series, bucketing days in UTC.
pub fn aggregate_daily_drift(
    records: &[EditRecord],
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<DailyDrift> {
    aggregate_daily_drift_with_offset(records, window_days, now, Utc.fix())
}

/// Same as [`aggregate_daily_drift`], bucketing calendar days at `offset`.
pub fn aggregate_daily_drift_with_offset(
    records: &[EditRecord],
    window_days: u32,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<DailyDrift> {
    let since = window_start(now, window_days);
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        if record.timestamp < since || record.timestamp > now {
            continue;
        }
        if !record.semantic_diff.is_finite() {
            skipped += 1;
            continue;
        }
        let day = record.timestamp.with_timezone(&offset).date_naive();
        *per_day.entry(day).or_insert(0.0) += record.semantic_diff.max(0.0);
    }

    if skipped > 0 {
        debug!(skipped, "skipped edit records with non-finite semantic diff");
    }

    let days: Vec<(NaiveDate, f64)> = per_day.into_iter().collect();
    let series = smooth_days(&days);
    debug!(
        records = records.len(),
        days = series.len(),
        window_days,
        "aggregated daily drift"
    );
    series
}

/// Earliest timestamp included in a trailing window ending at `now`.
/// Windows reaching past chrono's range start at `DateTime::MIN_UTC`.
pub fn window_start(now: DateTime<Utc>, window_days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(window_days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Build a `DailyDrift` series from ascending `(date, drift)` pairs.
///
/// Drift is rounded before smoothing so every EMA value stays inside the
/// envelope of the reported drift values.
pub fn smooth_days(days: &[(NaiveDate, f64)]) -> Vec<DailyDrift> {
    let drifts: Vec<f64> = days
        .iter()
        .map(|&(_, drift)| round_to(drift, SERIES_DECIMALS))
        .collect();
    let emas = compute_ema(&drifts);

    days.iter()
        .zip(drifts)
        .zip(emas)
        .map(|((&(date, _), drift), ema)| DailyDrift { date, drift, ema })
        .collect()
}

/// Exponential moving average with the fixed smoothing constant.
///
/// `ema[0] = x[0]`, `ema[i] = α·x[i] + (1-α)·ema[i-1]`. The recurrence runs
/// unrounded; each output is rounded to the series precision.
pub fn compute_ema(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let ema = match prev {
            None => value,
            Some(p) => EMA_ALPHA * value + (1.0 - EMA_ALPHA) * p,
        };
        prev = Some(ema);
        out.push(round_to(ema, SERIES_DECIMALS));
    }
    out
}
