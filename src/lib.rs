pub mod batch;
pub mod catalog;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod exit;
pub mod progress;
pub mod utils;
pub mod web_search;

pub use batch::{BatchRunner, BatchSummary};
pub use catalog::{DEFAULT_TITLES, SearchTask};
pub use config::FetchConfig;
pub use connectivity::{ConnectivityProbe, TcpProbe};
pub use error::{FetchError, FetchResult};
pub use exit::{RunExit, run_until_interrupted};
pub use progress::{ConsoleProgress, NoOpProgress, ProgressReporter};
pub use web_search::{
    Delay, HttpSearchBackend, SearchBackend, SearchExecutor, SearchOutcome, TokioDelay,
};

/// Run a batch over `tasks` with the production network stack
///
/// Uses `HttpSearchBackend`, `TcpProbe` and real sleeps, and reports progress
/// with `progress`.
pub async fn run<R: ProgressReporter>(
    config: &FetchConfig,
    tasks: &[SearchTask],
    progress: R,
) -> FetchResult<BatchSummary> {
    let executor = SearchExecutor::new(
        config,
        HttpSearchBackend::new(config)?,
        TcpProbe::from_config(config),
        TokioDelay,
        progress,
    );
    BatchRunner::new(config, executor).run(tasks).await
}
