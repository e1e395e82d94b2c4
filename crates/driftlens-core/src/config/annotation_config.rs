//! Annotation settings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_NOTE_CHARS, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
use crate::errors::{DriftLensError, DriftLensResult, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Trailing window for agreement statistics, in days.
    pub stats_window_days: u32,
    /// Notes longer than this are rejected.
    pub max_note_chars: usize,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            stats_window_days: DEFAULT_WINDOW_DAYS,
            max_note_chars: DEFAULT_MAX_NOTE_CHARS,
        }
    }
}

impl AnnotationConfig {
    pub fn validate(&self) -> DriftLensResult<()> {
        if self.stats_window_days == 0 || self.stats_window_days > MAX_WINDOW_DAYS {
            return Err(ValidationError::InvalidWindow {
                days: self.stats_window_days,
                max: MAX_WINDOW_DAYS,
            }
            .into());
        }
        if self.max_note_chars == 0 {
            return Err(DriftLensError::Config(
                "max_note_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
