//! Command-line front end for roster.
//!
//! Wires the reqwest engine and the JSON file store into the users
//! repositories, drives the fetch controllers and prints what they publish.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
