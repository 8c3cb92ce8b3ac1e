//! File-backed local store for roster.
//!
//! [`JsonFileDataSource`] implements [`LocalDataSource`](roster_core::LocalDataSource):
//! a writable cache directory of `<key>.json` documents, with read-only
//! fixtures as the fallback when the cache has nothing usable.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod fixtures;
mod json_file;

// ============================================================================
// Public API
// ============================================================================

pub use config::{FixtureSource, StoreConfig};
pub use fixtures::bundled;
pub use json_file::{JsonFileDataSource, encode_sorted};
