//! Property tests for the drift pipeline and change classifier.

use proptest::prelude::*;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use driftlens_analytics::aggregation::smooth_days;
use driftlens_analytics::change::vocabulary_overlap;
use driftlens_analytics::similarity::cosine_similarity;
use driftlens_analytics::{
    aggregate_daily_drift, classify_change, compute_ema, compute_insight, forecast_drift,
};
use driftlens_core::models::{DailyDrift, EditRecord, Trend, WarningState};

fn series(drifts: &[f64]) -> Vec<DailyDrift> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let days: Vec<(NaiveDate, f64)> = drifts
        .iter()
        .enumerate()
        .map(|(i, &d)| (start + Duration::days(i as i64), d))
        .collect();
    smooth_days(&days)
}

fn drifts() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..10.0, 1..60)
}

fn embedding(dims: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, dims)
}

// Every smoothed value stays between the smallest and largest drift seen.
proptest! {
    #[test]
    fn prop_ema_within_drift_envelope(values in drifts()) {
        let s = series(&values);
        let lo = s.iter().map(|d| d.drift).fold(f64::INFINITY, f64::min);
        let hi = s.iter().map(|d| d.drift).fold(f64::NEG_INFINITY, f64::max);
        for day in &s {
            prop_assert!(day.ema >= lo - 1e-9 && day.ema <= hi + 1e-9,
                "ema {} outside [{}, {}]", day.ema, lo, hi);
        }
    }
}

proptest! {
    #[test]
    fn prop_single_value_ema_is_identity(x in 0.0f64..1000.0) {
        let ema = compute_ema(&[x]);
        prop_assert_eq!(ema.len(), 1);
        prop_assert!((ema[0] - x).abs() <= 5e-5);
    }
}

proptest! {
    #[test]
    fn prop_forecasts_never_negative(values in drifts()) {
        let forecast = forecast_drift(&series(&values));
        prop_assert!(forecast.forecast_3d >= 0.0);
        prop_assert!(forecast.forecast_7d >= 0.0);
    }
}

// Trend, warning, and mode stay mutually consistent.
proptest! {
    #[test]
    fn prop_insight_is_consistent(values in drifts()) {
        let s = series(&values);
        let insight = compute_insight(&s);
        prop_assert_eq!(insight.days_analyzed, s.len());
        prop_assert!(insight.angle.angle.abs() < std::f64::consts::FRAC_PI_2 + 1e-4);
        if s.len() < 2 {
            prop_assert_eq!(insight.angle.trend, Trend::Flat);
        }
        if s.len() < 3 {
            prop_assert_eq!(insight.warning.state, WarningState::Stable);
        }
        prop_assert!(!insight.advice.is_empty());
        prop_assert_eq!(insight.today_drift, s.last().map(|d| d.drift).unwrap_or(0.0));
    }
}

// Aggregation conserves the in-window total and never emits empty days.
proptest! {
    #[test]
    fn prop_aggregation_conserves_mass(
        edits in prop::collection::vec((0i64..(20 * 24), 0.0f64..2.0), 0..80)
    ) {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 23, 0, 0).unwrap();
        let records: Vec<EditRecord> = edits
            .iter()
            .map(|&(hours_ago, diff)| EditRecord::new(now - Duration::hours(hours_ago), diff))
            .collect();
        let s = aggregate_daily_drift(&records, 30, now);

        let expected: f64 = edits.iter().map(|&(_, d)| d).sum();
        let total: f64 = s.iter().map(|d| d.drift).sum();
        prop_assert!((expected - total).abs() <= 1e-4 * (s.len().max(1) as f64));
        prop_assert!(s.windows(2).all(|w| w[0].date < w[1].date));
    }
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(
        old in "[a-z ]{0,80}",
        new in "[a-z ]{0,80}",
        a in embedding(8),
        b in embedding(8),
    ) {
        let first = classify_change(&old, &new, &a, &b, None);
        let second = classify_change(&old, &new, &a, &b, None);
        prop_assert_eq!(&first, &second);
        prop_assert!((0.0..=1.0).contains(&first.confidence));
        prop_assert!((0.0..=1.0).contains(&first.magnitude));
        prop_assert!((0.0..=1.0).contains(&first.metrics.topic_shift));
    }
}

proptest! {
    #[test]
    fn prop_self_overlap_is_one(text in "\\PC{0,120}") {
        prop_assert_eq!(vocabulary_overlap(&text, &text), 1.0);
    }
}

proptest! {
    #[test]
    fn prop_cosine_is_bounded_and_symmetric(a in embedding(6), b in embedding(6)) {
        let ab = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&ab));
        prop_assert!((ab - cosine_similarity(&b, &a)).abs() < 1e-12);
    }
}
