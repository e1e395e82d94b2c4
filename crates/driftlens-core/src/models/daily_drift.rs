use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate drift for one calendar day plus its smoothed value.
///
/// Only days with at least one edit appear in a series; gaps are not
/// zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyDrift {
    pub date: NaiveDate,
    /// Sum of per-edit semantic diffs recorded against `date`.
    pub drift: f64,
    /// Exponential moving average of `drift` up to and including `date`.
    pub ema: f64,
}
