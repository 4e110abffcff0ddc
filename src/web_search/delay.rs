//! Pluggable wait strategy for backoff and throttling

use std::future::Future;
use std::time::Duration;

/// Waits for a fixed duration
///
/// The executor and batch runner never sleep directly, so tests can record
/// requested waits instead of spending wall-clock time.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Real wall-clock wait on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
