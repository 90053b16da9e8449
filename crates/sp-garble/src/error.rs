//! Error types for the garbling engine.

use thiserror::Error;

/// Result type for garbler operations.
pub type GarbleResult<T> = Result<T, GarbleError>;

/// Errors that can occur when constructing a garbler.
///
/// Garbling itself never fails: missing lexical data degrades per word
/// instead of aborting the document.
#[derive(Debug, Error)]
pub enum GarbleError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
