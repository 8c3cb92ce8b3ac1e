//! Local data source port.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the local JSON store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither the cache nor the bundled fixtures hold this key.
    #[error("No cached or bundled data for key '{key}'")]
    NotFound {
        /// Logical key that was looked up
        key: String,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// The stored document does not decode into the requested type.
    #[error("Failed to decode stored data for key '{key}': {reason}")]
    DecodingFailed { key: String, reason: String },

    /// The value could not be serialized.
    #[error("Failed to encode value for key '{key}': {reason}")]
    EncodingFailed { key: String, reason: String },

    /// The cache file could not be written or replaced.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Keyed JSON persistence used as a best-effort cache.
///
/// `load` prefers the writable cache and falls back to read-only bundled
/// data. `save` always targets the writable cache and must replace the file
/// atomically.
#[async_trait]
pub trait LocalDataSource: Send + Sync {
    async fn load<T: DeserializeOwned + Send>(&self, key: &str) -> StoreResult<T>;

    async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound {
            key: "users_list".to_string(),
        };
        assert!(err.to_string().contains("users_list"));

        let err = StoreError::WriteFailed {
            path: PathBuf::from("/tmp/cache/users_list.json"),
            reason: "read-only file system".to_string(),
        };
        assert!(err.to_string().contains("read-only file system"));
    }
}
