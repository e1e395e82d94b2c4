//! GrowthAngleCalculator: slope of the last EMA step.

use driftlens_core::constants::{MIN_POINTS_FOR_ANGLE, SERIES_DECIMALS, TREND_THRESHOLD};
use driftlens_core::models::{DailyDrift, GrowthAngle, Trend};

use crate::numeric::round_to;

/// Trend of the last EMA step.
///
/// Fewer than two points yields [`GrowthAngle::flat`]. The trend uses the
/// change relative to the previous EMA (0 when that EMA is 0).
pub fn calc_growth_angle(series: &[DailyDrift]) -> GrowthAngle {
    let Some(diff) = raw_velocity(series) else {
        return GrowthAngle::flat();
    };

    let prev = series[series.len() - 2].ema;
    let relative_change = if prev == 0.0 { 0.0 } else { diff / prev };
    let trend = if relative_change > TREND_THRESHOLD {
        Trend::Rising
    } else if relative_change < -TREND_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Flat
    };

    let angle = diff.atan();
    GrowthAngle {
        angle: round_to(angle, SERIES_DECIMALS),
        angle_degrees: round_to(angle.to_degrees(), SERIES_DECIMALS),
        trend,
        velocity: round_to(diff, SERIES_DECIMALS),
    }
}

/// Unrounded `ema[last] - ema[last-1]`, or `None` below two points.
pub(crate) fn raw_velocity(series: &[DailyDrift]) -> Option<f64> {
    if series.len() < MIN_POINTS_FOR_ANGLE {
        return None;
    }
    let last = series[series.len() - 1].ema;
    let prev = series[series.len() - 2].ema;
    Some(last - prev)
}
