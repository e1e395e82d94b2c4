//! Daily drift aggregation settings.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::errors::{DriftLensError, DriftLensResult, ValidationError};

/// Largest UTC offset chrono accepts, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Trailing window of edit history fed into the insight, in days.
    pub window_days: u32,
    /// Offset used to bucket edits into calendar days. 0 = UTC.
    pub utc_offset_minutes: i32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            utc_offset_minutes: 0,
        }
    }
}

impl AnalyticsConfig {
    /// The day-bucketing offset. Falls back to UTC when out of range;
    /// `validate` rejects such configs up front.
    pub fn day_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60)
            .unwrap_or_else(|| Utc.fix())
    }

    pub fn validate(&self) -> DriftLensResult<()> {
        if self.window_days == 0 || self.window_days > MAX_WINDOW_DAYS {
            return Err(ValidationError::InvalidWindow {
                days: self.window_days,
                max: MAX_WINDOW_DAYS,
            }
            .into());
        }
        if self.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(DriftLensError::Config(format!(
                "utc_offset_minutes {} outside ±{}",
                self.utc_offset_minutes, MAX_OFFSET_MINUTES
            )));
        }
        Ok(())
    }
}
