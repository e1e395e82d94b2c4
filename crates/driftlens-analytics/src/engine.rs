//! DriftInsightEngine: wires the pure pipeline to injected collaborators.
//!
//! The engine only reads through the collaborator traits and holds no state
//! besides its config, so one instance can serve concurrent callers.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use driftlens_core::errors::DriftLensResult;
use driftlens_core::models::{
    AnnotationInput, AnnotationStats, DailyDrift, DriftAnnotation, DriftInsight,
    SemanticChangeDetail,
};
use driftlens_core::traits::{IAnnotationStore, IEditHistorySource, IEmbeddingProvider};
use driftlens_core::DriftLensConfig;

use crate::aggregation::{aggregate_daily_drift_with_offset, window_start};
use crate::annotation::{self, parse_date};
use crate::change::SemanticChangeClassifier;
use crate::insight::compute_insight;

pub struct DriftInsightEngine {
    config: DriftLensConfig,
}

impl DriftInsightEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: DriftLensConfig) -> DriftLensResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DriftLensConfig {
        &self.config
    }

    /// Daily drift series for the configured trailing window ending at `now`.
    pub fn daily_series(
        &self,
        source: &dyn IEditHistorySource,
        now: DateTime<Utc>,
    ) -> DriftLensResult<Vec<DailyDrift>> {
        let analytics = &self.config.analytics;
        let since = window_start(now, analytics.window_days);
        let records = source.edits_since(since)?;
        debug!(fetched = records.len(), %since, "edit history loaded");
        Ok(aggregate_daily_drift_with_offset(
            &records,
            analytics.window_days,
            now,
            analytics.day_offset(),
        ))
    }

    /// Full insight for the configured window ending at `now`.
    pub fn insight(
        &self,
        source: &dyn IEditHistorySource,
        now: DateTime<Utc>,
    ) -> DriftLensResult<DriftInsight> {
        let series = self.daily_series(source, now)?;
        Ok(compute_insight(&series))
    }

    /// Validate and upsert an annotation. Invalid input is rejected before
    /// the store is touched for writing.
    pub fn annotate(
        &self,
        store: &dyn IAnnotationStore,
        input: &AnnotationInput,
        now: DateTime<Utc>,
    ) -> DriftLensResult<DriftAnnotation> {
        let date = parse_date(&input.date)?;
        let existing = store.get(date)?;
        let annotation = annotation::upsert_annotation(
            input,
            existing.as_ref(),
            now,
            self.config.annotations.max_note_chars,
        )?;
        store.upsert(&annotation)?;
        info!(
            date = %annotation.date,
            label = %annotation.label,
            updated = existing.is_some(),
            "drift annotation saved"
        );
        Ok(annotation)
    }

    /// Agreement statistics over the configured stats window ending at `today`.
    pub fn annotation_stats(
        &self,
        store: &dyn IAnnotationStore,
        today: NaiveDate,
    ) -> DriftLensResult<AnnotationStats> {
        let window_days = self.config.annotations.stats_window_days;
        let since = annotation::window_start_date(today, window_days);
        let annotations = store.list_since(since)?;
        Ok(annotation::annotation_stats(&annotations, window_days, today))
    }

    /// Embed both texts through `provider` and classify the edit.
    pub fn classify_with(
        &self,
        provider: Arc<dyn IEmbeddingProvider>,
        old_text: &str,
        new_text: &str,
        magnitude: Option<f64>,
    ) -> DriftLensResult<SemanticChangeDetail> {
        SemanticChangeClassifier::new(provider).classify(old_text, new_text, magnitude)
    }
}
