//! Error types for dagcache
//!
//! All modules use `DagCacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dagcache operations
pub type DagCacheResult<T> = Result<T, DagCacheError>;

/// All errors that can occur in dagcache
#[derive(Error, Debug)]
pub enum DagCacheError {
    // Cache directory errors
    #[error("Failed to create cache directory {path}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Memo path does not fit in {capacity} bytes (needs {required})")]
    PathOverflow { capacity: usize, required: usize },

    #[error("Invalid path: {path}: {reason}")]
    PathInvalid { path: PathBuf, reason: String },

    // Memo errors
    #[error("Failed to read memo {path}: {source}")]
    MemoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Memo {path} is truncated, expected {expected} bytes")]
    MemoTruncated { path: PathBuf, expected: usize },

    #[error("Failed to remove stale memo {path}: {source}")]
    MemoRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write memo {path}: {source}")]
    MemoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed hash: {0}")]
    SeedHashInvalid(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache directory could not be determined")]
    CacheDirUnknown,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DagCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::DirCreate { .. } => {
                Some("Check that the parent directory exists and is writable")
            }
            Self::PathOverflow { .. } => Some("Use a shorter cache directory path"),
            Self::MemoTruncated { .. } => {
                Some("Remove the memo file by hand so the DAG is regenerated")
            }
            Self::SeedHashInvalid(_) => Some("Seed hash must be 64 hex characters"),
            Self::CacheDirUnknown => Some("Pass --dir or set [cache] dir in the config file"),
            _ => None,
        }
    }
}
