use super::error_code::{self, ErrorCode};
use super::{EmbeddingError, StorageError, ValidationError};

/// Top-level error type for driftlens.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum DriftLensError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias.
pub type DriftLensResult<T> = Result<T, DriftLensError>;

impl ErrorCode for DriftLensError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::Config(_) => error_code::CONFIG_ERROR,
        }
    }
}
