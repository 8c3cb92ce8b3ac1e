//! Public configuration for the HTTP network engine.

use std::time::Duration;

use roster_core::HeaderSet;

/// Base URL of the public fixture API the client talks to.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for [`ReqwestEngine`](crate::ReqwestEngine).
///
/// # Example
///
/// ```
/// use roster_http::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .with_base_url("http://localhost:3000")
///     .with_timeout(Duration::from_secs(10))
///     .with_default_header("Authorization", "Bearer token");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL every endpoint path is appended to
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request deadline; `None` keeps the client default
    pub(crate) timeout: Option<Duration>,
    /// Headers sent with every request unless the endpoint overrides them
    pub(crate) default_headers: HeaderSet,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("roster-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
            default_headers: HeaderSet::json_defaults(),
        }
    }
}

impl HttpClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a per-request deadline. Unset by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a default header.
    #[must_use]
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
