//! Progress reporting abstraction for batch runs
//!
//! Defines the `ProgressReporter` trait for operator-facing lifecycle events
//! and provides a console implementation and a no-op implementation.

use std::time::Duration;

use crate::batch::BatchSummary;

/// Trait for reporting batch progress at key lifecycle events
///
/// Implementations can print to the console, forward to a channel, etc.
/// The search and batch logic only ever talk to this trait.
pub trait ProgressReporter {
    /// Report that a title is about to be searched
    fn report_task_started(&self, index: usize, total: usize, title: &str);

    /// Report that the network is down and the executor is waiting
    fn report_offline(&self, wait: Duration);

    /// Report a failed request attempt (1-indexed)
    fn report_attempt_failed(&self, attempt: u32, retries: u32, error: &str);

    /// Report the pause before the next request attempt
    fn report_retry_wait(&self, wait: Duration);

    /// Report an unexpected, non-retried failure
    fn report_unexpected(&self, error: &str);

    /// Report the pause between two titles
    fn report_throttle(&self, wait: Duration);

    /// Report that every title has been written
    fn report_completed(&self, summary: &BatchSummary);
}

/// Progress reporter printing plain lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report_task_started(&self, index: usize, total: usize, title: &str) {
        println!("Searching for book {index}/{total}: {title}");
    }

    fn report_offline(&self, _wait: Duration) {
        println!("No internet connection. Waiting before retry...");
    }

    fn report_attempt_failed(&self, attempt: u32, retries: u32, error: &str) {
        println!("Attempt {attempt}/{retries} failed: {error}");
    }

    fn report_retry_wait(&self, wait: Duration) {
        println!("Waiting {} seconds before retrying...", wait.as_secs());
    }

    fn report_unexpected(&self, error: &str) {
        println!("Unexpected error: {error}");
    }

    fn report_throttle(&self, wait: Duration) {
        println!("Waiting {} seconds before next search...", wait.as_secs());
    }

    fn report_completed(&self, summary: &BatchSummary) {
        println!("{}", completion_message(summary));
    }
}

/// Closing line of a finished batch
#[must_use]
pub fn completion_message(summary: &BatchSummary) -> String {
    format!(
        "\nSearch completed. Results saved to {}",
        summary.output_path.display()
    )
}

/// Progress reporter that does nothing
///
/// Used by library callers and tests that want a silent run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_task_started(&self, _index: usize, _total: usize, _title: &str) {}

    #[inline(always)]
    fn report_offline(&self, _wait: Duration) {}

    #[inline(always)]
    fn report_attempt_failed(&self, _attempt: u32, _retries: u32, _error: &str) {}

    #[inline(always)]
    fn report_retry_wait(&self, _wait: Duration) {}

    #[inline(always)]
    fn report_unexpected(&self, _error: &str) {}

    #[inline(always)]
    fn report_throttle(&self, _wait: Duration) {}

    #[inline(always)]
    fn report_completed(&self, _summary: &BatchSummary) {}
}
