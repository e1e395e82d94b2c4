use serde::{Deserialize, Serialize};

/// Sample-count based confidence label. Does not reflect fit quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastConfidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftForecast {
    /// Projected EMA three days out. Never negative.
    pub forecast_3d: f64,
    /// Projected EMA seven days out. Never negative.
    pub forecast_7d: f64,
    pub confidence: ForecastConfidence,
}

impl DriftForecast {
    pub fn empty() -> Self {
        Self {
            forecast_3d: 0.0,
            forecast_7d: 0.0,
            confidence: ForecastConfidence::Low,
        }
    }
}
