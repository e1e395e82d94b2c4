//! Stable string codes for errors crossing the engine boundary.

/// Implemented by every driftlens error so hosts can branch on a code
/// instead of parsing display strings.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
