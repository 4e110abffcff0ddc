//! Error types for batch link fetching
//!
//! Only `NoConnectivity` at startup, `Config` and `Io` ever abort a batch.
//! `Request` and `Parse` are downgraded to a recorded error string for the
//! one title they belong to.

use thiserror::Error;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connectivity probe failed before the batch started
    #[error("No internet connection")]
    NoConnectivity,

    /// Network-level or non-2xx HTTP failure (retried)
    #[error("{0}")]
    Request(String),

    /// Unexpected failure while handling a fetched page (not retried)
    #[error("{0}")]
    Parse(String),

    /// Rejected by `FetchConfigBuilder::build`
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report file could not be created or written
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display omits the underlying cause (DNS, TLS, refused...)
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Request(message)
    }
}

impl FetchError {
    /// Check if error is transient and the request should be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, FetchError::Request(_))
    }
}
