//! Read-only fallback documents.

use std::io;
use std::path::Path;

use roster_core::{StoreError, StoreResult, USERS_LIST_CACHE_KEY};

use crate::config::FixtureSource;

const USERS_LIST: &str = include_str!("../fixtures/users_list.json");

/// Document compiled into the binary for `key`, if any.
pub fn bundled(key: &str) -> Option<&'static str> {
    match key {
        USERS_LIST_CACHE_KEY => Some(USERS_LIST),
        _ => None,
    }
}

/// Raw fixture bytes for `key`; `Ok(None)` when the source has none.
pub(crate) async fn read_fixture(
    source: &FixtureSource,
    key: &str,
) -> StoreResult<Option<Vec<u8>>> {
    match source {
        FixtureSource::Bundled => Ok(bundled(key).map(|doc| doc.as_bytes().to_vec())),
        FixtureSource::Directory(dir) => read_optional(&dir.join(format!("{key}.json"))).await,
        FixtureSource::Disabled => Ok(None),
    }
}

/// Read `path`, mapping a missing file to `Ok(None)`.
pub(crate) async fn read_optional(path: &Path) -> StoreResult<Option<Vec<u8>>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
