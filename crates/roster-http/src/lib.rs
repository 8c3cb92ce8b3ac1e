//! HTTP adapter for the roster network port.
//!
//! Compiles [`EndpointDescriptor`](roster_core::EndpointDescriptor)s into
//! concrete requests and executes them with reqwest. Consumers depend on
//! [`NetworkEngine`](roster_core::NetworkEngine); [`ReqwestEngine`] is the
//! production implementation.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod engine;
mod multipart;
mod request;

// ============================================================================
// Public API
// ============================================================================

pub use config::{DEFAULT_BASE_URL, HttpClientConfig};
pub use engine::{ReqwestEngine, is_success};
pub use multipart::{encode_multipart, multipart_content_type};
pub use request::{PreparedRequest, RequestBuilder, build_url};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
