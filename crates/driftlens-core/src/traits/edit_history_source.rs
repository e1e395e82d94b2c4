use chrono::{DateTime, Utc};

use crate::errors::DriftLensResult;
use crate::models::EditRecord;

/// Read side of the edit-history store.
pub trait IEditHistorySource: Send + Sync {
    /// All edits saved at or after `since`, in any order.
    fn edits_since(&self, since: DateTime<Utc>) -> DriftLensResult<Vec<EditRecord>>;
}
