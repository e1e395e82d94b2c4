//! DriftForecaster: linear extrapolation of the EMA.
//!
//! Confidence is a step function of the sample count only. There is no
//! residual or variance term.

use driftlens_core::constants::{
    FORECAST_HIGH_CONFIDENCE_POINTS, FORECAST_LONG_DAYS, FORECAST_MEDIUM_CONFIDENCE_POINTS,
    FORECAST_SHORT_DAYS, SERIES_DECIMALS,
};
use driftlens_core::models::{DailyDrift, DriftForecast, ForecastConfidence};

use crate::angle::raw_velocity;
use crate::numeric::round_to;

/// Project the EMA 3 and 7 days ahead using the last EMA step as velocity.
pub fn forecast_drift(series: &[DailyDrift]) -> DriftForecast {
    let Some(last) = series.last() else {
        return DriftForecast::empty();
    };

    let velocity = raw_velocity(series).unwrap_or(0.0);
    let project = |days: f64| round_to((last.ema + velocity * days).max(0.0), SERIES_DECIMALS);

    DriftForecast {
        forecast_3d: project(FORECAST_SHORT_DAYS),
        forecast_7d: project(FORECAST_LONG_DAYS),
        confidence: confidence_for(series.len()),
    }
}

fn confidence_for(points: usize) -> ForecastConfidence {
    if points >= FORECAST_HIGH_CONFIDENCE_POINTS {
        ForecastConfidence::High
    } else if points >= FORECAST_MEDIUM_CONFIDENCE_POINTS {
        ForecastConfidence::Medium
    } else {
        ForecastConfidence::Low
    }
}
