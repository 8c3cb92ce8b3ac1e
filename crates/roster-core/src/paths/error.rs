//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or preparing the cache directory.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system cache directory.
    #[error("Cannot determine system cache directory")]
    NoCacheDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}
