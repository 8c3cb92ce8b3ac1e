//! Local store configuration.

use std::path::{Path, PathBuf};

/// Where read-only fallback documents come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FixtureSource {
    /// Documents compiled into the binary.
    #[default]
    Bundled,
    /// `<key>.json` files in a directory.
    Directory(PathBuf),
    /// No fallback; a cache miss is `NotFound`.
    Disabled,
}

/// Configuration for [`JsonFileDataSource`](crate::JsonFileDataSource).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub(crate) cache_dir: PathBuf,
    pub(crate) fixtures: FixtureSource,
}

impl StoreConfig {
    /// Cache in `cache_dir`, bundled fixtures as fallback.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            fixtures: FixtureSource::default(),
        }
    }

    #[must_use]
    pub fn with_fixtures(mut self, fixtures: FixtureSource) -> Self {
        self.fixtures = fixtures;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub const fn fixtures(&self) -> &FixtureSource {
        &self.fixtures
    }
}
