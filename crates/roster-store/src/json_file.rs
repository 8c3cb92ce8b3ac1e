//! JSON file implementation of the local data source port.
//!
//! # File naming
//! `<cache_dir>/<key>.json`
//!
//! # Atomicity
//! 1. Write to `<cache_dir>/.<key>.<uuid>.tmp` and flush it to disk
//! 2. Rename over `<key>.json` (atomic on Unix/macOS)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use roster_core::{LocalDataSource, StoreError, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::fixtures::{read_fixture, read_optional};

const EXTENSION: &str = "json";

/// Keyed JSON documents in a cache directory, with fixture fallback.
#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    config: StoreConfig,
}

impl JsonFileDataSource {
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Cache file backing `key`.
    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.config.cache_dir.join(format!("{key}.{EXTENSION}"))
    }
}

fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> StoreResult<T> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::DecodingFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Pretty JSON with object keys in sorted order, at every depth.
pub fn encode_sorted<T: Serialize + ?Sized>(key: &str, value: &T) -> StoreResult<Vec<u8>> {
    let encoding_failed = |e: serde_json::Error| StoreError::EncodingFailed {
        key: key.to_string(),
        reason: e.to_string(),
    };
    let tree = serde_json::to_value(value).map_err(encoding_failed)?;
    serde_json::to_vec_pretty(&sort_keys(tree)).map_err(encoding_failed)
}

// Rebuilt explicitly; `Map` keeps insertion order under `preserve_order`.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

async fn write_atomic(
    dir: &Path,
    final_path: &Path,
    temp_name: &str,
    bytes: &[u8],
) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;

    let temp_path = dir.join(temp_name);
    let written = async {
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        tokio::fs::rename(&temp_path, final_path).await
    }
    .await;

    if written.is_err() {
        let _ = tokio::fs::remove_file(&temp_path).await;
    }
    written
}

#[async_trait]
impl LocalDataSource for JsonFileDataSource {
    async fn load<T: DeserializeOwned + Send>(&self, key: &str) -> StoreResult<T> {
        let path = self.cache_path(key);

        // A cache file that is unreadable or stale-shaped falls through to
        // the fixtures; its error is kept in case they have nothing either.
        let cache_error = match read_optional(&path).await {
            Ok(Some(bytes)) => match decode(key, &bytes) {
                Ok(value) => {
                    debug!(key, path = %path.display(), "Loaded from cache");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(key, error = %e, "Ignoring undecodable cache file");
                    Some(e)
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "Ignoring unreadable cache file");
                Some(e)
            }
        };

        match read_fixture(&self.config.fixtures, key).await? {
            Some(bytes) => {
                debug!(key, "Loaded from fixtures");
                decode(key, &bytes)
            }
            None => Err(cache_error.unwrap_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })),
        }
    }

    async fn save<T: Serialize + Sync>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = encode_sorted(key, value)?;
        let path = self.cache_path(key);
        let temp_name = format!(".{key}.{}.tmp", Uuid::new_v4());

        write_atomic(&self.config.cache_dir, &path, &temp_name, &bytes)
            .await
            .map_err(|e| StoreError::WriteFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        debug!(key, path = %path.display(), bytes = bytes.len(), "Saved to cache");
        Ok(())
    }
}
