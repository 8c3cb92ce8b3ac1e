//! Core domain types.
//!
//! These types represent the pure domain model, independent of the wire
//! format the remote API uses and of any storage concerns.

mod user;

pub use user::{Address, Company, Geo, User};
