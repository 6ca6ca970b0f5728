//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::Client;

/// Default backend address for local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

/// HTTP client for communicating with the backend API server.
///
/// Holds a connection pool; clone-free sharing is done by passing references.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given backend address.
    ///
    /// The client is configured with a 10 second timeout so a dead backend
    /// cannot freeze the caller.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The base URL requests are built against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
