//! # driftlens-analytics
//!
//! The thought-drift analytics engine. Pure, synchronous computations over
//! already-fetched data:
//!
//! - `aggregation`: per-day drift sums and EMA smoothing
//! - `angle`: growth angle and trend from the last EMA step
//! - `forecast`: 3/7-day linear extrapolation
//! - `warning`: overheat / stagnation detection against mean ± σ
//! - `mode`: behavioral mode and advice text
//! - `insight`: composes the above into one `DriftInsight`
//! - `change`: per-edit semantic change classification
//! - `annotation`: label validation, phase agreement, statistics
//! - `engine`: wires the above to injected collaborators

pub mod aggregation;
pub mod angle;
pub mod annotation;
pub mod change;
pub mod engine;
pub mod forecast;
pub mod insight;
pub mod mode;
pub mod numeric;
pub mod rules;
pub mod similarity;
pub mod warning;

pub use aggregation::{aggregate_daily_drift, aggregate_daily_drift_with_offset, compute_ema};
pub use angle::calc_growth_angle;
pub use annotation::{annotation_stats, match_phase, upsert_annotation};
pub use change::{classify_change, SemanticChangeClassifier};
pub use engine::DriftInsightEngine;
pub use forecast::forecast_drift;
pub use insight::compute_insight;
pub use mode::classify_mode;
pub use warning::detect_warning;
