mod driftlens_error;
mod embedding_error;
mod error_code;
mod storage_error;
mod validation_error;

pub use driftlens_error::{DriftLensError, DriftLensResult};
pub use embedding_error::EmbeddingError;
pub use error_code::ErrorCode;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
