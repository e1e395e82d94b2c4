mod annotation;
mod daily_drift;
mod edit_record;
mod forecast;
mod growth_angle;
mod insight;
mod mode;
mod semantic_change;
mod warning;

pub use annotation::{
    AnnotationInput, AnnotationStats, DriftAnnotation, DriftLabel, DriftPhase, PhaseMatch,
    PhaseMatchCounts,
};
pub use daily_drift::DailyDrift;
pub use edit_record::EditRecord;
pub use forecast::{DriftForecast, ForecastConfidence};
pub use growth_angle::{GrowthAngle, Trend};
pub use insight::DriftInsight;
pub use mode::DriftMode;
pub use semantic_change::{ChangeMetrics, SemanticChangeDetail, SemanticChangeType};
pub use warning::{DriftWarning, WarningSeverity, WarningState};
