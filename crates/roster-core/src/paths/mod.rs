//! Cache directory resolution.
//!
//! Resolution order:
//! 1. `ROSTER_CACHE_DIR` environment variable (highest priority)
//! 2. System cache directory (e.g., `~/.cache/roster`)

mod error;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use error::PathError;

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "ROSTER_CACHE_DIR";

/// Directory name used under the system cache directory.
const APP_DIR_NAME: &str = "roster";

/// Resolve the writable cache directory from the environment.
pub fn cache_dir() -> Result<PathBuf, PathError> {
    resolve_cache_dir(env::var(CACHE_DIR_ENV).ok().as_deref(), dirs::cache_dir())
}

/// Pure resolver behind [`cache_dir`].
pub fn resolve_cache_dir(
    env_override: Option<&str>,
    system_cache: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(raw) = env_override {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(PathBuf::from(trimmed));
    }

    system_cache
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoCacheDir)
}

/// Create `path` (and parents) if missing; fail if it is not a directory.
pub fn ensure_cache_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
