//! DriftAnnotationMatcher: user day labels versus the system phase.
//!
//! Descriptive only. Disagreement is counted, never corrected.

mod matcher;
mod stats;
mod upsert;

pub use matcher::{expected_phases, match_phase};
pub use stats::{annotation_stats, window_start_date};
pub use upsert::{parse_date, upsert_annotation};
