//! # driftlens-storage
//!
//! SQLite persistence for driftlens. Implements `IEditHistorySource` and
//! `IAnnotationStore` over a single connection guarded by a mutex.

pub mod migrations;
pub mod pragmas;
pub mod queries;
pub mod store;

pub use queries::edit_ops::StoredEdit;
pub use store::SqliteStore;

/// Helper to convert a string message into a `DriftLensError::Storage`.
pub fn to_storage_err(msg: String) -> driftlens_core::DriftLensError {
    driftlens_core::DriftLensError::Storage(driftlens_core::errors::StorageError::Sqlite {
        message: msg,
    })
}

/// Helper for rows that exist but cannot be decoded.
pub(crate) fn corrupt_row(table: &str, reason: String) -> driftlens_core::DriftLensError {
    driftlens_core::DriftLensError::Storage(driftlens_core::errors::StorageError::CorruptRow {
        table: table.to_string(),
        reason,
    })
}
