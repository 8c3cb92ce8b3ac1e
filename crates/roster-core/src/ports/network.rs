//! Network engine port.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::endpoints::EndpointDescriptor;

/// Boxed cause of a transport-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raw errors from building, sending or decoding a request.
///
/// Adapters map their client-specific errors into these; the client library
/// itself never appears in a signature.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The base URL, path and query did not compose into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    EncodingFailed(String),

    /// The response body did not decode into the expected shape.
    #[error("Failed to decode response: {0}")]
    DecodingFailed(String),

    /// The server answered outside the success range.
    #[error("HTTP error {status}: {message}")]
    HttpError {
        /// Status code
        status: u16,
        /// Reason phrase for the status
        message: String,
    },

    /// DNS, TLS, connection or timeout failure.
    #[error("Network fault: {0}")]
    NetworkFault(#[source] BoxError),
}

/// Result type alias for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Executes endpoint descriptors and decodes their JSON responses.
///
/// Implementations treat status codes in `200..300` as success; anything
/// else fails with [`NetworkError::HttpError`].
#[async_trait]
pub trait NetworkEngine: Send + Sync {
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> NetworkResult<T>;
}
