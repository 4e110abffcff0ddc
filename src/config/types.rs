//! Core configuration type for a batch run
//!
//! `FetchConfig` carries every tunable of the scraper. It is only ever built
//! through `FetchConfigBuilder`, which fills in the defaults from
//! `crate::utils::constants` and validates the result.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::builder::FetchConfigBuilder;

/// Main configuration struct for a batch run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Search endpoint, already validated as an absolute http(s) URL
    pub(crate) search_url: String,

    /// Request attempts per title. Always at least 1.
    pub(crate) retries: u32,

    /// Pause between attempts and between connectivity re-checks
    pub(crate) retry_delay: Duration,

    pub(crate) request_timeout: Duration,

    /// Pause between consecutive titles
    pub(crate) throttle_interval: Duration,

    pub(crate) probe_addr: SocketAddr,
    pub(crate) probe_timeout: Duration,

    /// Maximum connectivity waits per title before giving up on it.
    ///
    /// `None` waits for as long as the network stays down; an offline wait
    /// never consumes a request attempt.
    pub(crate) max_offline_waits: Option<u32>,

    /// Report file, truncated at the start of every run
    pub(crate) output_path: PathBuf,
}

impl FetchConfig {
    /// Create a builder pre-filled with the crate defaults
    #[must_use]
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}
