//! Input validation errors. Rejected input is never written or coerced.

use super::error_code::{self, ErrorCode};

/// Errors raised while validating caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("unknown drift label: {value:?}")]
    UnknownLabel { value: String },

    #[error("unknown drift phase: {value:?}")]
    UnknownPhase { value: String },

    #[error("note too long: {chars} chars, limit {limit}")]
    NoteTooLong { chars: usize, limit: usize },

    #[error("invalid window: {days} days (allowed 1..={max})")]
    InvalidWindow { days: u32, max: u32 },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDate { .. } => "VALIDATION_INVALID_DATE",
            Self::UnknownLabel { .. } => "VALIDATION_UNKNOWN_LABEL",
            Self::UnknownPhase { .. } => "VALIDATION_UNKNOWN_PHASE",
            Self::NoteTooLong { .. } => "VALIDATION_NOTE_TOO_LONG",
            Self::InvalidWindow { .. } => error_code::VALIDATION_ERROR,
        }
    }
}
