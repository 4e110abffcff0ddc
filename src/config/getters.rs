//! Getter methods for `FetchConfig`

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use super::types::FetchConfig;

impl FetchConfig {
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn throttle_interval(&self) -> Duration {
        self.throttle_interval
    }

    #[must_use]
    pub fn probe_addr(&self) -> SocketAddr {
        self.probe_addr
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }

    #[must_use]
    pub fn max_offline_waits(&self) -> Option<u32> {
        self.max_offline_waits
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
