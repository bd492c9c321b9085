//! Error types for mission file I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or writing mission files.
#[derive(Debug, Error)]
pub enum MizError {
    /// Mission file missing or unreadable.
    #[error("failed to read mission file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid mission document.
    #[error("failed to parse mission file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output path not writable.
    #[error("failed to write mission file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize mission document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias for results with [`MizError`].
pub type Result<T> = std::result::Result<T, MizError>;
