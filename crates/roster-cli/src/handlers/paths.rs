//! Paths command handler.
//!
//! Displays the resolved cache and fixture locations for diagnostics.

use std::fmt::Write;

use anyhow::Result;
use roster_core::USERS_LIST_CACHE_KEY;
use roster_store::FixtureSource;

use crate::bootstrap::CliConfig;

/// `key = value` lines describing where data is read from and written to.
pub fn render(config: &CliConfig) -> String {
    let fixtures = match &config.fixtures {
        FixtureSource::Bundled => "bundled".to_string(),
        FixtureSource::Directory(dir) => dir.display().to_string(),
        FixtureSource::Disabled => "disabled".to_string(),
    };
    let timeout = config
        .timeout
        .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));

    let mut out = String::new();
    let _ = writeln!(out, "base_url = {}", config.base_url);
    let _ = writeln!(out, "cache_dir = {}", config.cache_dir.display());
    let _ = writeln!(
        out,
        "users_list_cache = {}",
        config
            .cache_dir
            .join(format!("{USERS_LIST_CACHE_KEY}.json"))
            .display()
    );
    let _ = writeln!(out, "fixtures = {fixtures}");
    let _ = writeln!(out, "timeout = {timeout}");
    out
}

/// Execute the paths command.
pub fn execute(config: &CliConfig) -> Result<()> {
    print!("{}", render(config));
    Ok(())
}
