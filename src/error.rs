// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepscopeError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, DepscopeError>;

impl DepscopeError {
    /// Wraps an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(source: std::io::Error, path: &std::path::Path) -> Self {
        DepscopeError::Io {
            source,
            path: path.to_path_buf(),
        }
    }
}
