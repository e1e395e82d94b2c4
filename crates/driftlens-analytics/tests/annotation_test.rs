//! Annotation upserts through the engine, phase agreement, statistics.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use driftlens_analytics::annotation::window_start_date;
use driftlens_analytics::{annotation_stats, match_phase, DriftInsightEngine};
use driftlens_core::errors::{DriftLensResult, ValidationError};
use driftlens_core::models::{
    AnnotationInput, DriftAnnotation, DriftLabel, DriftPhase, PhaseMatch,
};
use driftlens_core::traits::IAnnotationStore;
use driftlens_core::{DriftLensConfig, DriftLensError};

#[derive(Default)]
struct MemoryStore {
    rows: Mutex<BTreeMap<NaiveDate, DriftAnnotation>>,
    writes: Mutex<usize>,
}

impl IAnnotationStore for MemoryStore {
    fn get(&self, date: NaiveDate) -> DriftLensResult<Option<DriftAnnotation>> {
        Ok(self.rows.lock().unwrap().get(&date).cloned())
    }

    fn upsert(&self, annotation: &DriftAnnotation) -> DriftLensResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.rows
            .lock()
            .unwrap()
            .insert(annotation.date, annotation.clone());
        Ok(())
    }

    fn list_since(&self, since: NaiveDate) -> DriftLensResult<Vec<DriftAnnotation>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .range(since..)
            .map(|(_, a)| a.clone())
            .collect())
    }
}

fn engine() -> DriftInsightEngine {
    DriftInsightEngine::new(DriftLensConfig::default()).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn input(date: &str, label: &str, phase: Option<&str>) -> AnnotationInput {
    AnnotationInput {
        date: date.to_string(),
        label: label.to_string(),
        note: None,
        auto_phase: phase.map(str::to_string),
    }
}

fn annotation(day: NaiveDate, label: DriftLabel, phase: Option<DriftPhase>) -> DriftAnnotation {
    let stamp = at(2024, 6, 1, 12);
    DriftAnnotation {
        date: day,
        label,
        note: None,
        auto_phase: phase,
        created_at: stamp,
        updated_at: stamp,
    }
}

// ── Phase agreement ──────────────────────────────────────────────────────

#[test]
fn breakthrough_against_each_phase() {
    assert_eq!(
        match_phase(DriftLabel::Breakthrough, Some(DriftPhase::Destruction)),
        PhaseMatch::Mismatched
    );
    assert_eq!(
        match_phase(DriftLabel::Breakthrough, Some(DriftPhase::Creation)),
        PhaseMatch::Matched
    );
    assert_eq!(match_phase(DriftLabel::Breakthrough, None), PhaseMatch::Unknown);
}

#[test]
fn neutral_labels_only_accept_neutral() {
    for label in [DriftLabel::Stagnation, DriftLabel::Routine] {
        assert_eq!(match_phase(label, Some(DriftPhase::Neutral)), PhaseMatch::Matched);
        assert_eq!(match_phase(label, Some(DriftPhase::Creation)), PhaseMatch::Mismatched);
    }
}

// ── Engine upserts ───────────────────────────────────────────────────────

#[test]
fn annotate_creates_then_updates_in_place() {
    let store = MemoryStore::default();
    let engine = engine();

    let first = engine
        .annotate(&store, &input("2024-06-10", "exploration", Some("creation")), at(2024, 6, 10, 8))
        .unwrap();
    assert_eq!(first.label, DriftLabel::Exploration);
    assert_eq!(first.auto_phase, Some(DriftPhase::Creation));

    let second = engine
        .annotate(&store, &input("2024-06-10", "organizing", None), at(2024, 6, 10, 20))
        .unwrap();
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.updated_at, at(2024, 6, 10, 20));
    assert_eq!(second.auto_phase, None);

    let rows = store.list_since(date(2024, 1, 1)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], second);
}

#[test]
fn invalid_input_never_reaches_the_store() {
    let store = MemoryStore::default();
    let engine = engine();
    let now = at(2024, 6, 10, 8);

    let bad_label = engine.annotate(&store, &input("2024-06-10", "Breakthrough", None), now);
    assert!(matches!(
        bad_label,
        Err(DriftLensError::Validation(ValidationError::UnknownLabel { .. }))
    ));

    let bad_date = engine.annotate(&store, &input("10/06/2024", "routine", None), now);
    assert!(matches!(
        bad_date,
        Err(DriftLensError::Validation(ValidationError::InvalidDate { .. }))
    ));

    let mut long_note = input("2024-06-10", "routine", None);
    long_note.note = Some("x".repeat(2001));
    assert!(matches!(
        engine.annotate(&store, &long_note, now),
        Err(DriftLensError::Validation(ValidationError::NoteTooLong { chars: 2001, limit: 2000 }))
    ));

    assert_eq!(*store.writes.lock().unwrap(), 0);
}

#[test]
fn note_limit_follows_config() {
    let config = DriftLensConfig::from_toml("[annotations]\nmax_note_chars = 10\n").unwrap();
    let engine = DriftInsightEngine::new(config).unwrap();
    let store = MemoryStore::default();

    let mut with_note = input("2024-06-10", "routine", None);
    with_note.note = Some("eleven char".to_string());
    assert!(engine.annotate(&store, &with_note, at(2024, 6, 10, 8)).is_err());

    with_note.note = Some("  ten chars!  ".to_string());
    let saved = engine.annotate(&store, &with_note, at(2024, 6, 10, 8)).unwrap();
    assert_eq!(saved.note.as_deref(), Some("ten chars!"));
}

// ── Statistics ───────────────────────────────────────────────────────────

#[test]
fn stats_count_only_the_window_and_zero_fill_labels() {
    let today = date(2024, 6, 30);
    let annotations = vec![
        annotation(today - Duration::days(40), DriftLabel::Confusion, Some(DriftPhase::Creation)),
        annotation(today - Duration::days(7), DriftLabel::Breakthrough, Some(DriftPhase::Creation)),
        annotation(today - Duration::days(3), DriftLabel::Breakthrough, Some(DriftPhase::Destruction)),
        annotation(today - Duration::days(1), DriftLabel::Routine, None),
        annotation(today, DriftLabel::Organizing, Some(DriftPhase::Neutral)),
    ];

    let stats = annotation_stats(&annotations, 30, today);

    assert_eq!(stats.total, 4);
    assert_eq!(stats.by_label.len(), DriftLabel::ALL.len());
    assert_eq!(stats.by_label[&DriftLabel::Breakthrough], 2);
    assert_eq!(stats.by_label[&DriftLabel::Confusion], 0);
    assert_eq!(stats.by_label[&DriftLabel::Exploration], 0);
    assert_eq!(stats.phase_match.matched, 2);
    assert_eq!(stats.phase_match.mismatched, 1);
    assert_eq!(stats.phase_match.unknown, 1);
    let rate = stats.phase_match.agreement_rate().unwrap();
    assert!((rate - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn stats_window_includes_both_edges() {
    let today = date(2024, 6, 30);
    let annotations = vec![
        annotation(today - Duration::days(30), DriftLabel::Routine, None),
        annotation(today + Duration::days(1), DriftLabel::Routine, None),
    ];
    assert_eq!(annotation_stats(&annotations, 30, today).total, 1);
}

#[test]
fn empty_stats_have_no_agreement_rate() {
    let stats = annotation_stats(&[], 30, date(2024, 6, 30));
    assert_eq!(stats.total, 0);
    assert!(stats.by_label.values().all(|&n| n == 0));
    assert_eq!(stats.phase_match.agreement_rate(), None);
}

#[test]
fn engine_stats_read_through_the_store() {
    let store = MemoryStore::default();
    let engine = engine();
    for (day, label, phase) in [
        ("2024-05-01", "stagnation", Some("neutral")),
        ("2024-06-20", "stagnation", Some("neutral")),
        ("2024-06-25", "confusion", Some("neutral")),
    ] {
        engine
            .annotate(&store, &input(day, label, phase), at(2024, 6, 30, 9))
            .unwrap();
    }

    let stats = engine.annotation_stats(&store, date(2024, 6, 30)).unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.by_label[&DriftLabel::Stagnation], 1);
    assert_eq!(stats.phase_match.matched, 1);
    assert_eq!(stats.phase_match.mismatched, 1);
}

#[test]
fn oversized_stats_window_counts_all_history() {
    let today = date(2024, 6, 30);
    let annotations = vec![
        annotation(date(1970, 1, 1), DriftLabel::Routine, None),
        annotation(today, DriftLabel::Breakthrough, Some(DriftPhase::Creation)),
    ];
    let stats = annotation_stats(&annotations, u32::MAX, today);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.phase_match.matched, 1);
    assert_eq!(window_start_date(today, u32::MAX), NaiveDate::MIN);
}
