//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use roster_http::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for browsing users of a JSON REST API.
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse users from a JSON REST API with a local cache")]
#[command(version)]
pub struct Cli {
    /// Base URL of the users API
    #[arg(long, env = "ROSTER_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Override the cache directory for this invocation
    #[arg(long, env = "ROSTER_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long, env = "ROSTER_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Read fallback fixtures from this directory instead of the bundled ones
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Disable fixture fallback entirely
    #[arg(long, global = true, conflicts_with = "fixtures")]
    pub no_fixtures: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "roster",
            "--base-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "5",
            "list",
            "--refresh",
            "--cache-dir",
            "/tmp/roster",
        ]);

        assert_eq!(cli.base_url, "http://127.0.0.1:9000");
        assert_eq!(cli.timeout_secs, Some(5));
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/roster")));
        assert!(matches!(cli.command, Some(Commands::List { refresh: true })));
    }

    #[test]
    fn test_show_takes_an_id() {
        let cli = Cli::parse_from(["roster", "show", "3"]);
        assert!(matches!(cli.command, Some(Commands::Show { id: 3 })));

        assert!(Cli::try_parse_from(["roster", "show", "three"]).is_err());
    }

    #[test]
    fn test_fixture_flags_conflict() {
        let result = Cli::try_parse_from(["roster", "--fixtures", "/srv", "--no-fixtures", "list"]);
        assert!(result.is_err());
    }
}
