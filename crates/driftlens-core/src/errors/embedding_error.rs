/// Errors from an injected embedding provider.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {provider}")]
    Unavailable { provider: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding failed: {reason}")]
    Failed { reason: String },
}

impl super::ErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        super::error_code::EMBEDDING_ERROR
    }
}
