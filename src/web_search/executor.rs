//! Core search execution logic
//!
//! Resolves one query to a `SearchOutcome`: connectivity check, GET with a
//! bounded number of attempts and a fixed pause between them, then first-link
//! extraction.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::client::SearchBackend;
use super::delay::Delay;
use super::extract::extract_first_link;
use super::types::SearchOutcome;
use crate::config::FetchConfig;
use crate::connectivity::ConnectivityProbe;
use crate::progress::ProgressReporter;

/// Runs searches against a backend with connectivity checks and retries
///
/// # Retry policy
///
/// - Request failures (network, timeout, non-2xx) consume an attempt and are
///   retried after `retry_delay` until `retries` attempts are spent.
/// - An offline probe result waits `retry_delay` and re-checks without
///   consuming an attempt. Unless `max_offline_waits` is set this waits for as
///   long as the network stays down.
/// - Parse anomalies are never retried.
#[derive(Debug)]
pub struct SearchExecutor<B, P, D, R> {
    backend: B,
    probe: P,
    delay: D,
    progress: R,
    retries: u32,
    retry_delay: Duration,
    max_offline_waits: Option<u32>,
}

impl<B, P, D, R> SearchExecutor<B, P, D, R>
where
    B: SearchBackend,
    P: ConnectivityProbe,
    D: Delay,
    R: ProgressReporter,
{
    pub fn new(config: &FetchConfig, backend: B, probe: P, delay: D, progress: R) -> Self {
        Self {
            backend,
            probe,
            delay,
            progress,
            retries: config.retries(),
            retry_delay: config.retry_delay(),
            max_offline_waits: config.max_offline_waits(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn progress(&self) -> &R {
        &self.progress
    }

    /// Resolve `query` to the first result link
    ///
    /// Never fails: every error path is folded into `SearchOutcome::Failed`
    /// so the caller can record it and move on to the next title.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let retries = self.retries;
        let mut attempt = 0u32;
        let mut offline_waits = 0u32;

        while attempt < retries {
            if !self.probe.is_reachable().await {
                if let Some(max) = self.max_offline_waits
                    && offline_waits >= max
                {
                    warn!(query, offline_waits, "Giving up on query, network still down");
                    return SearchOutcome::Failed(format!(
                        "Error: no internet connection after {offline_waits} waits"
                    ));
                }
                offline_waits += 1;
                self.progress.report_offline(self.retry_delay);
                self.delay.wait(self.retry_delay).await;
                continue;
            }

            let result = match self.backend.fetch(query).await {
                Ok(body) => {
                    debug!(query, bytes = body.len(), "Parsing results page");
                    extract_first_link(&body)
                }
                Err(e) => Err(e),
            };

            match result {
                Ok(Some(link)) => {
                    if attempt > 0 {
                        info!(query, attempt = attempt + 1, "Search succeeded after retry");
                    }
                    return SearchOutcome::Link(link);
                }
                Ok(None) => return SearchOutcome::NotFound,
                Err(e) if e.is_transient() => {
                    attempt += 1;
                    let message = e.to_string();
                    warn!(query, attempt, max_attempts = retries, error = %message, "Search attempt failed");
                    self.progress.report_attempt_failed(attempt, retries, &message);

                    if attempt >= retries {
                        return SearchOutcome::Failed(format!(
                            "Error after {retries} attempts: {message}"
                        ));
                    }
                    self.progress.report_retry_wait(self.retry_delay);
                    self.delay.wait(self.retry_delay).await;
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!(query, error = %message, "Unexpected failure, not retrying");
                    self.progress.report_unexpected(&message);
                    return SearchOutcome::Failed(format!("Error: {message}"));
                }
            }
        }

        // Unreachable through FetchConfigBuilder, which rejects zero retries
        SearchOutcome::Failed(format!("Error after {retries} attempts: no attempt was made"))
    }
}
