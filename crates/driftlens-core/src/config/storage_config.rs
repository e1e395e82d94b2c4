use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database. `None` opens an in-memory database.
    pub db_path: Option<String>,
}
