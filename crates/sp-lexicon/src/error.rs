//! Error types for lexicon loading.

use thiserror::Error;

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that can occur while loading a lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    /// The lexicon document is not valid JSON or has the wrong shape.
    #[error("invalid lexicon document: {0}")]
    Json(#[from] serde_json::Error),
}
