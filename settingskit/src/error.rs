//! Error types for the settings engine.

use settingskit_model::SchemaError;
use settingskit_storage::StorageError;
use thiserror::Error;

/// Result type for engine operations that can fail.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Failures of construction and persistence.
///
/// Reads, writes and validation never produce these: a missing or mistyped
/// value falls back to a default and a rejected URI lands in the error set.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The schema table failed its checks.
    #[error("invalid settings schema: {0}")]
    Schema(#[from] SchemaError),

    /// The backing store failed to load or flush.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A custom URI pattern did not compile.
    #[error("invalid URI pattern: {0}")]
    Pattern(#[from] regex::Error),
}
