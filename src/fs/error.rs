//! Error types for the scoped file handle.

use std::path::PathBuf;

use thiserror::Error;

use super::FileMode;

/// Errors that can occur while working with a [`FileManager`](super::FileManager).
#[derive(Debug, Error)]
pub enum FileError {
    /// The underlying file could not be opened (missing path in read mode,
    /// permission denied, and so on).
    #[error("failed to open {} in {mode} mode: {source}", .path.display())]
    Open {
        path: PathBuf,
        mode: FileMode,
        source: std::io::Error,
    },

    /// An I/O operation on the opened file failed.
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}
