//! Error types for caredesk

use std::path::PathBuf;

use thiserror::Error;

/// Failure results of the bounded containers.
///
/// None of these imply a mutation: a container that returns an error is left
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert attempted while `count == capacity`
    #[error("store is full (capacity {capacity})")]
    Full { capacity: usize },

    /// Removal attempted on an empty container
    #[error("store is empty")]
    Empty,

    /// Keyed removal found no record with a matching key
    #[error("no record matches key {key:?}")]
    NotFound { key: String },

    /// The leading field of a record is empty, so it cannot be stored
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
}

/// Main error type for caredesk operations
#[derive(Error, Debug)]
pub enum CaredeskError {
    /// Container capacity/underflow failures
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A store file could not be written
    #[error("Failed to save {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// General errors
    #[error("{0}")]
    General(String),
}

/// Result type alias for caredesk operations
pub type Result<T> = std::result::Result<T, CaredeskError>;
