//! Storage Errors
//!
//! Error types for the key-value storage layer.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the aggregate
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O failure in a file-backed store
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key is not usable as a storage key
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend refused the write
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The built-in seed dataset failed validation
    #[error("Seed dataset is invalid: {0}")]
    InvalidSeed(#[from] crate::domain::DomainError),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error came from the underlying medium
    pub fn is_io(&self) -> bool {
        matches!(self, StorageError::Io { .. } | StorageError::Unavailable(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
