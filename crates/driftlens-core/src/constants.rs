//! Fixed tuning constants for the analytics pipeline.
//!
//! These are not exposed through config: changing any of them changes the
//! comparability of historical insights.

/// EMA smoothing constant.
pub const EMA_ALPHA: f64 = 0.3;

/// Decimal places kept on drift, EMA, angle, and forecast outputs.
pub const SERIES_DECIMALS: u32 = 4;

/// Decimal places kept on semantic change metrics.
pub const CHANGE_DECIMALS: u32 = 3;

/// Relative EMA change beyond which the trend is rising or falling.
pub const TREND_THRESHOLD: f64 = 0.05;

/// Minimum daily points for a non-flat growth angle.
pub const MIN_POINTS_FOR_ANGLE: usize = 2;

/// Minimum daily points before warnings are evaluated.
pub const MIN_POINTS_FOR_WARNING: usize = 3;

/// Forecast horizons in days.
pub const FORECAST_SHORT_DAYS: f64 = 3.0;
pub const FORECAST_LONG_DAYS: f64 = 7.0;

/// Sample counts for forecast confidence tiers.
pub const FORECAST_HIGH_CONFIDENCE_POINTS: usize = 14;
pub const FORECAST_MEDIUM_CONFIDENCE_POINTS: usize = 7;

/// Sigma multipliers for the warning tiers.
pub const OVERHEAT_HIGH_SIGMA: f64 = 2.0;
pub const OVERHEAT_SIGMA: f64 = 1.5;
pub const STAGNATION_HIGH_SIGMA: f64 = 2.0;
pub const STAGNATION_MID_SIGMA: f64 = 1.5;
pub const STAGNATION_SIGMA: f64 = 1.0;

/// Semantic change classification thresholds.
pub const REFINEMENT_MAX_MAGNITUDE: f64 = 0.05;
pub const PIVOT_MIN_TOPIC_SHIFT: f64 = 0.4;
pub const EXPANSION_MIN_RATIO: f64 = 1.3;
pub const CONTRACTION_MAX_RATIO: f64 = 0.7;
pub const DEEPENING_MIN_OVERLAP: f64 = 0.7;
pub const DEEPENING_STRUCTURE_BONUS_THRESHOLD: f64 = 0.6;

/// Weights for the topic shift blend.
pub const TOPIC_SHIFT_EMBEDDING_WEIGHT: f64 = 0.7;
pub const TOPIC_SHIFT_VOCABULARY_WEIGHT: f64 = 0.3;

/// Weights for the structural similarity blend.
pub const STRUCTURE_HEADING_WEIGHT: f64 = 0.6;
pub const STRUCTURE_PARAGRAPH_WEIGHT: f64 = 0.4;

/// Default trailing window for aggregation and annotation stats.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Upper bound accepted for any trailing window.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Default maximum annotation note length in characters.
pub const DEFAULT_MAX_NOTE_CHARS: usize = 2000;
