//! Reqwest-backed network engine.

use async_trait::async_trait;
use roster_core::{EndpointDescriptor, HttpMethod, NetworkEngine, NetworkError, NetworkResult};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::HttpClientConfig;
use crate::request::{PreparedRequest, RequestBuilder};

/// Whether `status` counts as a successful response.
pub const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Production [`NetworkEngine`] over a shared `reqwest::Client`.
///
/// Status codes in `200..300` are success; everything else becomes
/// [`NetworkError::HttpError`] carrying the canonical reason phrase. There is
/// no retry.
#[derive(Debug, Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
    builder: RequestBuilder,
    timeout: Option<Duration>,
}

impl ReqwestEngine {
    /// Create an engine from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NetworkFault`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &HttpClientConfig) -> NetworkResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NetworkError::NetworkFault(Box::new(e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Create an engine around an existing client.
    pub fn with_client(client: reqwest::Client, config: &HttpClientConfig) -> Self {
        Self {
            client,
            builder: RequestBuilder::new(config.base_url.clone())
                .with_default_headers(config.default_headers.clone()),
            timeout: config.timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        self.builder.base_url()
    }

    fn to_reqwest(&self, request: PreparedRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

fn network_fault(err: reqwest::Error) -> NetworkError {
    NetworkError::NetworkFault(Box::new(err))
}

#[async_trait]
impl NetworkEngine for ReqwestEngine {
    async fn execute<T: DeserializeOwned + Send>(
        &self,
        endpoint: &EndpointDescriptor,
    ) -> NetworkResult<T> {
        let request = self.builder.build(endpoint)?;
        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = self
            .to_reqwest(request)
            .send()
            .await
            .map_err(network_fault)?;

        let status = response.status();
        if !is_success(status.as_u16()) {
            debug!(status = status.as_u16(), "Request failed");
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(network_fault)?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "Received response");

        serde_json::from_slice(&bytes).map_err(|e| NetworkError::DecodingFailed(e.to_string()))
    }
}
