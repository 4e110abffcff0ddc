// Book link scraper
//
// Searches every built-in title in turn and writes the first result link of
// each to book_links.txt. Exits 0 on completion or Ctrl-C, 1 when offline at
// startup or on any other fatal error.

use std::process::ExitCode;

use anyhow::{Context, Result};
use booklinks::{
    BatchSummary, ConsoleProgress, DEFAULT_TITLES, FetchConfig, FetchResult, SearchTask,
    run_until_interrupted,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")
}

async fn run() -> FetchResult<BatchSummary> {
    let config = FetchConfig::builder().build()?;
    let tasks = SearchTask::from_titles(DEFAULT_TITLES);
    booklinks::run(&config, &tasks, ConsoleProgress).await
}

async fn ctrl_c() {
    // Without a signal handler the run can only end on its own
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{e:#}");
    }

    let exit = run_until_interrupted(run(), ctrl_c()).await;
    if let Some(message) = exit.message() {
        println!("{message}");
    }
    exit.exit_code()
}
