// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Attaches the offending path to an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ScanError::Io {
            source,
            path: path.into(),
        }
    }
}
