//! Core error types for focusfuel-core.
//!
//! Storage and configuration failures are the only error families this
//! library can produce; everything else in the system is total over its
//! input domain (unknown ids are no-ops, malformed blobs fall back to
//! defaults).

use std::path::PathBuf;
use thiserror::Error;

/// Blob-store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// Blob serialization failed
    #[error("blob serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Data directory could not be resolved or created
    #[error("data directory unavailable: {0}")]
    DataDir(#[from] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("data directory unavailable: {0}")]
    DataDir(#[from] std::io::Error),
}
