//! Sequential batch driver
//!
//! Checks connectivity once up front, then resolves each task in order,
//! writing its record immediately and pausing between titles.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info};

use super::record::ReportWriter;
use crate::catalog::SearchTask;
use crate::config::FetchConfig;
use crate::connectivity::ConnectivityProbe;
use crate::error::{FetchError, FetchResult};
use crate::progress::ProgressReporter;
use crate::web_search::{Delay, SearchBackend, SearchExecutor, SearchOutcome};

/// Tally of a finished batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_path: PathBuf,
    /// Records written, always equal to the number of tasks
    pub written: usize,
    pub links_found: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl BatchSummary {
    fn new(output_path: PathBuf) -> Self {
        Self {
            output_path,
            written: 0,
            links_found: 0,
            not_found: 0,
            errors: 0,
        }
    }

    fn record(&mut self, outcome: &SearchOutcome) {
        self.written += 1;
        match outcome {
            SearchOutcome::Link(_) => self.links_found += 1,
            SearchOutcome::NotFound => self.not_found += 1,
            SearchOutcome::Failed(_) => self.errors += 1,
        }
    }
}

#[derive(Debug)]
pub struct BatchRunner<B, P, D, R> {
    executor: SearchExecutor<B, P, D, R>,
    throttle_interval: Duration,
    output_path: PathBuf,
}

impl<B, P, D, R> BatchRunner<B, P, D, R>
where
    B: SearchBackend,
    P: ConnectivityProbe,
    D: Delay,
    R: ProgressReporter,
{
    pub fn new(config: &FetchConfig, executor: SearchExecutor<B, P, D, R>) -> Self {
        Self {
            executor,
            throttle_interval: config.throttle_interval(),
            output_path: config.output_path().to_path_buf(),
        }
    }

    pub fn executor(&self) -> &SearchExecutor<B, P, D, R> {
        &self.executor
    }

    /// Resolve every task and write the report
    ///
    /// # Errors
    ///
    /// - `FetchError::NoConnectivity` if the probe fails before the first
    ///   task. The report file is not created or touched in that case.
    /// - `FetchError::Io` if the report cannot be created or written.
    ///
    /// Search failures are never returned here; they are recorded in the
    /// report as the task's link line.
    pub async fn run(&self, tasks: &[SearchTask]) -> FetchResult<BatchSummary> {
        if !self.executor.probe().is_reachable().await {
            error!("No connectivity at startup, report not written");
            return Err(FetchError::NoConnectivity);
        }

        let mut writer = ReportWriter::create(&self.output_path).await?;
        let mut summary = BatchSummary::new(self.output_path.clone());
        let total = tasks.len();
        let progress = self.executor.progress();

        info!(total, path = %self.output_path.display(), "Starting batch");

        for (position, task) in tasks.iter().enumerate() {
            progress.report_task_started(task.index(), total, task.title());

            let outcome = self.executor.search(task.title()).await;
            writer.write_record(task, &outcome).await?;
            summary.record(&outcome);

            if position + 1 < total {
                progress.report_throttle(self.throttle_interval);
                self.executor.delay().wait(self.throttle_interval).await;
            }
        }

        writer.finish().await?;

        info!(
            written = summary.written,
            links = summary.links_found,
            not_found = summary.not_found,
            errors = summary.errors,
            "Batch complete"
        );
        progress.report_completed(&summary);

        Ok(summary)
    }
}
