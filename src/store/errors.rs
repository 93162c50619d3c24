//! Error types for the log store

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Log store errors
///
/// None of these are fatal to the process: persist failures leave the
/// in-memory log authoritative, load failures start an empty log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk write failed during persist
    #[error("failed to persist log to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted file exists but could not be read
    #[error("failed to read persisted log from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted file is not a valid JSON record array
    #[error("persisted log at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory log could not be encoded as JSON
    #[error("failed to encode log as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}
