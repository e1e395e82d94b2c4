use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};

use driftlens_core::models::{AnnotationStats, DriftAnnotation, DriftLabel, PhaseMatchCounts};

use super::matcher::match_phase;

/// First date of the inclusive window `[today - window_days, today]`,
/// clamped to `NaiveDate::MIN`.
pub fn window_start_date(today: NaiveDate, window_days: u32) -> NaiveDate {
    TimeDelta::try_days(i64::from(window_days))
        .and_then(|span| today.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN)
}

/// Label counts and phase agreement for annotations dated within
/// `[today - window_days, today]`.
pub fn annotation_stats(
    annotations: &[DriftAnnotation],
    window_days: u32,
    today: NaiveDate,
) -> AnnotationStats {
    let since = window_start_date(today, window_days);
    let mut by_label: BTreeMap<DriftLabel, usize> =
        DriftLabel::ALL.into_iter().map(|label| (label, 0)).collect();
    let mut phase_match = PhaseMatchCounts::default();
    let mut total = 0;

    for annotation in annotations
        .iter()
        .filter(|a| a.date >= since && a.date <= today)
    {
        total += 1;
        *by_label.entry(annotation.label).or_insert(0) += 1;
        phase_match.record(match_phase(annotation.label, annotation.auto_phase));
    }

    AnnotationStats {
        total,
        by_label,
        phase_match,
    }
}
