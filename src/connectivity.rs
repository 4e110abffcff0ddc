//! Network reachability probe
//!
//! Opens a TCP connection to a well-known public address and drops it. Any
//! failure (timeout, refusal, unreachable network) counts as offline; the
//! caller never learns which.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

use crate::config::FetchConfig;

/// Reachability check run before the batch and before every request attempt
pub trait ConnectivityProbe {
    fn is_reachable(&self) -> impl Future<Output = bool>;
}

/// Probe that completes a TCP handshake with `addr` within `timeout`
#[derive(Debug, Clone, Copy)]
pub struct TcpProbe {
    addr: SocketAddr,
    timeout: Duration,
}

impl TcpProbe {
    #[must_use]
    pub fn new(addr: SocketAddr, timeout: Duration) -> Self {
        Self { addr, timeout }
    }

    #[must_use]
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(config.probe_addr(), config.probe_timeout())
    }
}

impl ConnectivityProbe for TcpProbe {
    async fn is_reachable(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(self.addr)).await {
            // Stream dropped here, closing the connection
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                debug!(addr = %self.addr, error = %e, "Connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(addr = %self.addr, timeout = ?self.timeout, "Connectivity probe timed out");
                false
            }
        }
    }
}
