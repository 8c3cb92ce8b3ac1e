//! Pure request construction.
//!
//! These functions turn an [`EndpointDescriptor`] into a concrete
//! [`PreparedRequest`] without touching the network, so they are fully
//! testable offline.

use roster_core::endpoints::header_name;
use roster_core::{Body, EndpointDescriptor, HeaderSet, HttpMethod, NetworkError, NetworkResult};
use url::Url;

use crate::multipart::{encode_multipart, multipart_content_type};

/// A fully resolved request, ready to hand to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderSet,
    pub body: Option<Vec<u8>>,
}

/// Builds [`PreparedRequest`]s against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    default_headers: HeaderSet,
}

impl RequestBuilder {
    /// Builder with the JSON default headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: HeaderSet::json_defaults(),
        }
    }

    #[must_use]
    pub fn with_default_headers(mut self, headers: HeaderSet) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `endpoint` into a request.
    ///
    /// Endpoint headers override the defaults. A multipart body always sets
    /// its own `Content-Type`, whatever either header set says.
    pub fn build(&self, endpoint: &EndpointDescriptor) -> NetworkResult<PreparedRequest> {
        let url = build_url(&self.base_url, &endpoint.path, endpoint.query.as_deref())?;

        let mut headers = match &endpoint.headers {
            Some(overrides) => self.default_headers.merged(overrides),
            None => self.default_headers.clone(),
        };

        let body = match &endpoint.body {
            None => None,
            Some(Body::Json(value)) => Some(
                serde_json::to_vec(value)
                    .map_err(|e| NetworkError::EncodingFailed(e.to_string()))?,
            ),
            Some(Body::Raw(bytes)) => Some(bytes.clone()),
            Some(Body::Multipart { boundary, parts }) => {
                headers.insert(header_name::CONTENT_TYPE, multipart_content_type(boundary));
                Some(encode_multipart(boundary, parts))
            }
        };

        Ok(PreparedRequest {
            method: endpoint.method,
            url,
            headers,
            body,
        })
    }
}

/// Append `path` to `base_url` and attach `query` in order.
///
/// An absent or empty query leaves the URL without a `?`.
pub fn build_url(
    base_url: &str,
    path: &str,
    query: Option<&[(String, String)]>,
) -> NetworkResult<Url> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    let mut url =
        Url::parse(&raw).map_err(|e| NetworkError::InvalidUrl(format!("{raw}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(NetworkError::InvalidUrl(format!("{raw}: not a hierarchical URL")));
    }

    if let Some(pairs) = query.filter(|pairs| !pairs.is_empty()) {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url)
}
