use serde::{Deserialize, Serialize};

use super::{DriftForecast, DriftMode, DriftWarning, GrowthAngle};

/// Everything the host needs to render one drift report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftInsight {
    pub angle: GrowthAngle,
    pub forecast: DriftForecast,
    pub warning: DriftWarning,
    pub mode: DriftMode,
    /// Mode advice, or the warning recommendation when not stable.
    pub advice: String,
    /// Drift of the latest day in the series, 0 when empty.
    pub today_drift: f64,
    /// EMA of the latest day in the series, 0 when empty.
    pub today_ema: f64,
    /// Number of daily points the insight was computed from.
    pub days_analyzed: usize,
}
