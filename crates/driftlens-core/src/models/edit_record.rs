use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One edit event as read from the edit-history collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    /// When the edit was saved.
    pub timestamp: DateTime<Utc>,
    /// Semantic distance between the before/after versions, nominally in [0, 1].
    pub semantic_diff: f64,
}

impl EditRecord {
    pub fn new(timestamp: DateTime<Utc>, semantic_diff: f64) -> Self {
        Self {
            timestamp,
            semantic_diff,
        }
    }
}
