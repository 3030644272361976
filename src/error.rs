//! Error types for the layer diff system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by snapshotting and comparing directory trees
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Invalid root {path:?}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert a walkdir failure, keeping the underlying I/O error when there is one.
    pub(crate) fn from_walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        if err.loop_ancestor().is_some() {
            return DiffError::Walk {
                path,
                message: err.to_string(),
            };
        }
        match err.into_io_error() {
            Some(source) => DiffError::Io { path, source },
            None => DiffError::Walk {
                path,
                message: "traversal failed".to_string(),
            },
        }
    }
}

impl From<config::ConfigError> for DiffError {
    fn from(err: config::ConfigError) -> Self {
        DiffError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
