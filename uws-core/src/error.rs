//! Error types for UWS documents and filters

use thiserror::Error;

/// Result type alias for document construction
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors raised while building a JSON document
#[derive(Debug, Error)]
pub enum JsonError {
    /// Key is empty or only whitespace
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Key was already written to the same document
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Custom job information failed to convert itself
    #[error("Job info conversion failed: {0}")]
    JobInfo(String),
}

/// Errors raised while constructing a job filter
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Started-after filter built without a cutoff date
    #[error("Missing limit date! Can not create an after filter.")]
    MissingCutoff,

    /// Cutoff text is not an ISO-8601 timestamp
    #[error("Invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// Rejected text
        value: String,
        /// Parser message
        reason: String,
    },

    /// Phase filter built from an empty phase set
    #[error("A phase filter needs at least one phase")]
    NoPhase,

    /// Unknown execution phase name
    #[error("Unknown execution phase: {0}")]
    UnknownPhase(String),
}
