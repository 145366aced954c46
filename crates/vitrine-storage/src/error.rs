//! Storage error types.

use thiserror::Error;

/// Errors that can occur when reading or writing durable storage.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store rejected the operation.
    #[error("Store operation failed: {0}")]
    Backend(String),

    /// Stored data could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
