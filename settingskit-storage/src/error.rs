//! Error types for the storage layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while loading or persisting a store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file parsed but does not hold a settings object.
    #[error("invalid settings file {path}: {reason}")]
    InvalidData { path: PathBuf, reason: String },
}
