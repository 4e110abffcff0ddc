//! How a batch run ends, and the process exit code for each ending
//!
//! Exit code 0 on completion or user interrupt, 1 when offline at startup or
//! on any other fatal error.

use std::future::Future;
use std::process::ExitCode;

use tracing::info;

use crate::batch::BatchSummary;
use crate::error::{FetchError, FetchResult};

/// Final state of a run
#[derive(Debug)]
pub enum RunExit {
    Completed(BatchSummary),

    /// The interrupt signal fired first; the run future was dropped
    Interrupted,

    Failed(FetchError),
}

impl RunExit {
    /// Numeric process exit status
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::Completed(_) | Self::Interrupted => 0,
            Self::Failed(_) => 1,
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    /// Closing line for the operator, if this ending has one
    ///
    /// Completion is announced by the progress reporter, so it has none here.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Completed(_) => None,
            Self::Interrupted => Some("\nScript interrupted by user. Exiting...".to_string()),
            Self::Failed(FetchError::NoConnectivity) => Some(
                "No internet connection. Please check your connection and try again.".to_string(),
            ),
            Self::Failed(e) => Some(format!("\nAn unexpected error occurred: {e}")),
        }
    }
}

impl From<FetchResult<BatchSummary>> for RunExit {
    fn from(result: FetchResult<BatchSummary>) -> Self {
        match result {
            Ok(summary) => Self::Completed(summary),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Drive `run` to completion unless `interrupt` resolves first
///
/// On interrupt the run future is dropped mid-flight. Records already written
/// stay on disk because the report is flushed after each one.
pub async fn run_until_interrupted<F, S>(run: F, interrupt: S) -> RunExit
where
    F: Future<Output = FetchResult<BatchSummary>>,
    S: Future<Output = ()>,
{
    tokio::select! {
        result = run => RunExit::from(result),
        () = interrupt => {
            info!("Interrupt received, abandoning batch");
            RunExit::Interrupted
        }
    }
}
