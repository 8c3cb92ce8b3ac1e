//! Subcommands.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users (served from the cache when available)
    List {
        /// Skip the cache and fetch from the network
        #[arg(long)]
        refresh: bool,
    },

    /// Show one user's details
    Show {
        /// User id
        id: u64,
    },

    /// Show resolved cache and fixture locations
    Paths,
}
