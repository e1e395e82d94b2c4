//! DriftInsightComposer: one insight from one daily series.

use driftlens_core::models::{DailyDrift, DriftInsight};
use tracing::debug;

use crate::angle::calc_growth_angle;
use crate::forecast::forecast_drift;
use crate::mode::{classify_mode, resolve_advice};
use crate::warning::detect_warning;

/// Compose angle, forecast, warning, mode, and advice for `series`.
///
/// The series must be ascending by date, as produced by the aggregator.
pub fn compute_insight(series: &[DailyDrift]) -> DriftInsight {
    let angle = calc_growth_angle(series);
    let forecast = forecast_drift(series);
    let warning = detect_warning(series);
    let mode = classify_mode(angle.trend, warning.state);
    let advice = resolve_advice(mode, &warning);
    let (today_drift, today_ema) = series
        .last()
        .map(|d| (d.drift, d.ema))
        .unwrap_or((0.0, 0.0));

    debug!(
        days = series.len(),
        trend = ?angle.trend,
        warning = ?warning.state,
        mode = %mode,
        "drift insight composed"
    );

    DriftInsight {
        angle,
        forecast,
        warning,
        mode,
        advice,
        today_drift,
        today_ema,
        days_analyzed: series.len(),
    }
}
