//! Fluent builder for `FetchConfig`
//!
//! Every field has a default, so unlike a typestate builder there is no
//! required call before `build()`. Validation happens once, in `build()`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::types::FetchConfig;
use crate::error::{FetchError, FetchResult};
use crate::utils::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PROBE_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RETRIES,
    DEFAULT_RETRY_DELAY, DEFAULT_THROTTLE_INTERVAL, PROBE_ADDR, SEARCH_URL,
};

#[derive(Debug, Clone)]
pub struct FetchConfigBuilder {
    pub(crate) search_url: String,
    pub(crate) retries: u32,
    pub(crate) retry_delay: Duration,
    pub(crate) request_timeout: Duration,
    pub(crate) throttle_interval: Duration,
    pub(crate) probe_addr: String,
    pub(crate) probe_timeout: Duration,
    pub(crate) max_offline_waits: Option<u32>,
    pub(crate) output_path: PathBuf,
}

impl Default for FetchConfigBuilder {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            probe_addr: PROBE_ADDR.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_offline_waits: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl FetchConfigBuilder {
    /// Override the search endpoint (tests point this at a local mock server)
    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the number of request attempts per title
    ///
    /// # Arguments
    /// * `retries` - Maximum number of attempts, must be at least 1 (default: 3)
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    #[must_use]
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle_interval = interval;
        self
    }

    /// Address probed for connectivity, as `host:port` with a literal IP
    #[must_use]
    pub fn probe_addr(mut self, addr: impl Into<String>) -> Self {
        self.probe_addr = addr.into();
        self
    }

    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Bound the number of connectivity waits per title
    ///
    /// By default a title waits indefinitely for the network to come back.
    /// With a bound, the title is recorded as an error once it is exceeded.
    #[must_use]
    pub fn max_offline_waits(mut self, waits: u32) -> Self {
        self.max_offline_waits = Some(waits);
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Config` if `retries` is zero, the search URL is not
    /// an absolute http(s) URL, the probe address is not `ip:port`, or the
    /// output path is empty.
    pub fn build(self) -> FetchResult<FetchConfig> {
        if self.retries == 0 {
            return Err(FetchError::Config(
                "retries must be at least 1".to_string(),
            ));
        }

        let parsed = Url::parse(&self.search_url).map_err(|e| {
            FetchError::Config(format!("Invalid search URL '{}': {e}", self.search_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::Config(format!(
                "Search URL must be http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let probe_addr: SocketAddr = self.probe_addr.parse().map_err(|e| {
            FetchError::Config(format!("Invalid probe address '{}': {e}", self.probe_addr))
        })?;

        if self.output_path.as_os_str().is_empty() {
            return Err(FetchError::Config("output path is empty".to_string()));
        }

        Ok(FetchConfig {
            search_url: self.search_url,
            retries: self.retries,
            retry_delay: self.retry_delay,
            request_timeout: self.request_timeout,
            throttle_interval: self.throttle_interval,
            probe_addr,
            probe_timeout: self.probe_timeout,
            max_offline_waits: self.max_offline_waits,
            output_path: self.output_path,
        })
    }
}
