use chrono::NaiveDate;

use crate::errors::DriftLensResult;
use crate::models::DriftAnnotation;

/// Persistence for daily annotations, keyed uniquely by date.
///
/// Implementations store what they are given; validation happens before
/// `upsert` is called.
pub trait IAnnotationStore: Send + Sync {
    fn get(&self, date: NaiveDate) -> DriftLensResult<Option<DriftAnnotation>>;

    /// Insert or replace the annotation for `annotation.date`.
    fn upsert(&self, annotation: &DriftAnnotation) -> DriftLensResult<()>;

    /// Annotations dated on or after `since`, ascending by date.
    fn list_since(&self, since: NaiveDate) -> DriftLensResult<Vec<DriftAnnotation>>;
}
