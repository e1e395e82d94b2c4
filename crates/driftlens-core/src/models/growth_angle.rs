use serde::{Deserialize, Serialize};

/// Direction of the most recent EMA step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

/// Slope of the last two EMA points expressed as an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthAngle {
    /// `atan(ema[last] - ema[last-1])`, radians.
    pub angle: f64,
    pub angle_degrees: f64,
    pub trend: Trend,
    /// Raw EMA difference per day.
    pub velocity: f64,
}

impl GrowthAngle {
    /// Floor value for series too short to have a slope.
    pub fn flat() -> Self {
        Self {
            angle: 0.0,
            angle_degrees: 0.0,
            trend: Trend::Flat,
            velocity: 0.0,
        }
    }
}
