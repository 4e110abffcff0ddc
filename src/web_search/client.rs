//! HTTP transport for search queries
//!
//! `SearchBackend` is the seam between the retry loop and the network: the
//! production `HttpSearchBackend` issues a real GET, tests substitute
//! scripted backends.

use std::future::Future;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::utils::{BROWSER_HEADERS, BROWSER_USER_AGENT};

/// Fetches the raw HTML of a results page for one query
pub trait SearchBackend {
    /// # Errors
    ///
    /// Network failures and non-2xx statuses surface as `FetchError::Request`.
    fn fetch(&self, query: &str) -> impl Future<Output = FetchResult<String>>;
}

/// Build the GET URL for `query`, percent-encoding it into the `q` parameter
///
/// Spaces become `%20` and non-ASCII text is encoded as UTF-8 octets.
#[must_use]
pub fn build_search_url(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}q={}", urlencoding::encode(query))
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    for (name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

/// reqwest-backed search backend
///
/// Sends the browser header set with a per-request timeout. Certificate
/// verification stays enabled.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    search_url: String,
}

impl HttpSearchBackend {
    /// # Errors
    ///
    /// Returns `FetchError::Config` if the HTTP client cannot be built (for
    /// example when no TLS backend can be initialised).
    pub fn new(config: &FetchConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FetchError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            search_url: config.search_url().to_string(),
        })
    }
}

impl SearchBackend for HttpSearchBackend {
    async fn fetch(&self, query: &str) -> FetchResult<String> {
        let url = build_search_url(&self.search_url, query);
        debug!(url = %url, "Sending search request");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        debug!(status = %response.status(), "Search response received");

        Ok(response.text().await?)
    }
}
