//! Error types for the dirprep utility library.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem-related errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Memoization errors
#[derive(Debug, Error)]
pub enum MemoError {
    #[error("Failed to serialize arguments into a cache key: {0}")]
    Key(#[from] bincode::Error),
}

/// Configuration errors (logging setup)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Failed to initialize logging: {0}")]
    InitFailed(String),
}
