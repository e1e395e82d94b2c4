//! # driftlens-core
//!
//! Foundation crate for the driftlens thought-drift analytics engine.
//! Defines the value types, collaborator traits, errors, config, constants,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DriftLensConfig;
pub use errors::{DriftLensError, DriftLensResult, ErrorCode};
