//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where adapters are wired together for the
//! CLI: the reqwest network engine, the JSON file store, and the users
//! repositories built over them. Command handlers receive the composed
//! [`CliContext`] and drive controllers from it.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use roster_core::{
    CachedUsersListRepository, RemoteUserDetailsRepository, UserDetailsRepository,
    UsersListRepository, cache_dir, ensure_cache_dir,
};
use roster_http::{HttpClientConfig, ReqwestEngine};
use roster_store::{FixtureSource, JsonFileDataSource, StoreConfig};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Base URL of the users API.
    pub base_url: String,
    /// Writable cache directory.
    pub cache_dir: PathBuf,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// Fallback fixture source.
    pub fixtures: FixtureSource,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// Without `--cache-dir` the cache lives in the resolved application
    /// cache directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cache_dir = match &cli.cache_dir {
            Some(dir) => dir.clone(),
            None => cache_dir()?,
        };

        let fixtures = if cli.no_fixtures {
            FixtureSource::Disabled
        } else {
            cli.fixtures
                .clone()
                .map_or(FixtureSource::Bundled, FixtureSource::Directory)
        };

        Ok(Self {
            base_url: cli.base_url.clone(),
            cache_dir,
            timeout: cli.timeout_secs.map(Duration::from_secs),
            fixtures,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub config: CliConfig,
    pub users_list: Arc<dyn UsersListRepository>,
    pub user_details: Arc<dyn UserDetailsRepository>,
}

/// Wire the production adapters described by `config`.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let http_config = HttpClientConfig::new()
        .with_base_url(config.base_url.clone())
        .with_optional_timeout(config.timeout);
    let engine = Arc::new(ReqwestEngine::new(&http_config)?);

    if let Err(e) = ensure_cache_dir(&config.cache_dir) {
        tracing::warn!(error = %e, "Cache directory unavailable; continuing without cache");
    }

    let store = Arc::new(JsonFileDataSource::new(
        StoreConfig::new(config.cache_dir.clone()).with_fixtures(config.fixtures.clone()),
    ));

    tracing::debug!(
        base_url = %config.base_url,
        cache_dir = %config.cache_dir.display(),
        "Bootstrapped roster context"
    );

    Ok(CliContext {
        users_list: Arc::new(CachedUsersListRepository::new(Arc::clone(&engine), store)),
        user_details: Arc::new(RemoteUserDetailsRepository::new(engine)),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "roster",
            "--base-url",
            "http://localhost:1234",
            "--cache-dir",
            "/tmp/roster-cache",
            "--timeout-secs",
            "3",
            "--fixtures",
            "/srv/fixtures",
            "paths",
        ]);

        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config,
            CliConfig {
                base_url: "http://localhost:1234".to_string(),
                cache_dir: PathBuf::from("/tmp/roster-cache"),
                timeout: Some(Duration::from_secs(3)),
                fixtures: FixtureSource::Directory(PathBuf::from("/srv/fixtures")),
            }
        );
    }

    #[test]
    fn test_no_fixtures_flag() {
        let cli = Cli::parse_from(["roster", "--cache-dir", "/tmp/x", "--no-fixtures", "list"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.fixtures, FixtureSource::Disabled);
    }

    #[test]
    fn test_bootstrap_wires_context() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            cache_dir: dir.path().join("nested").join("cache"),
            timeout: None,
            fixtures: FixtureSource::Bundled,
        };

        let ctx = bootstrap(config.clone()).unwrap();
        assert_eq!(ctx.config, config);
        assert!(config.cache_dir.is_dir());
    }
}
