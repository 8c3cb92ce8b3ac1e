//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that repositories expect from
//! infrastructure. They contain no implementation details.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - No filesystem layout details; stores are addressed by logical key
//! - Adapters map their own errors into the port error enums

mod local_data_source;
mod network;

pub use local_data_source::{LocalDataSource, StoreError, StoreResult};
pub use network::{BoxError, NetworkEngine, NetworkError, NetworkResult};
