//! Application orchestration.
//!
//! Wires the poll loop and the metrics server together and coordinates
//! shutdown: the first of an operator signal or a background fault decides
//! how the process ends.

mod fault;
mod poller;
mod server;

pub use fault::{fault_channel, Fault, FaultSender};
pub use poller::Poller;
pub use server::{router, serve, serve_on};

use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::metrics::PostmarkMetrics;
use crate::port::StatsSource;
use crate::postmark::Client;

/// How long in-flight work may finish after shutdown begins.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Why the process is shutting down. Decides the exit status.
#[derive(Debug)]
pub enum ShutdownReason {
    /// Operator interrupt or terminate; exit status 0.
    Signal,
    /// The poll loop reported a terminal failure; exit status 1.
    PollFailed(Error),
    /// The metrics server reported a terminal failure; exit status 1.
    ServeFailed(Error),
}

impl From<Fault> for ShutdownReason {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::Poll(err) => ShutdownReason::PollFailed(err),
            Fault::Serve(err) => ShutdownReason::ServeFailed(err),
        }
    }
}

/// Main application struct.
pub struct App;

impl App {
    /// Run both loops against the production Postmark API until shutdown.
    pub async fn run(config: Config) -> Result<ShutdownReason> {
        let metrics = Arc::new(PostmarkMetrics::new()?);
        let client = Client::new(config.server_token.clone());
        Self::run_with_source(config, client, metrics).await
    }

    /// Run both loops with an explicit statistics source and registry.
    pub async fn run_with_source<S>(
        config: Config,
        source: S,
        metrics: Arc<PostmarkMetrics>,
    ) -> Result<ShutdownReason>
    where
        S: StatsSource + 'static,
    {
        let (faults, mut fault_rx) = fault_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let poller = Poller::new(source, Arc::clone(&metrics), config.polling_interval);
        let mut poll_handle = tokio::spawn(poller.run(shutdown_rx.clone(), faults.clone()));

        let mut server_handle = tokio::spawn(serve(
            config.listen_addr,
            Arc::clone(&metrics),
            shutdown_rx,
            faults.clone(),
        ));

        // The first fault or the operator signal decides the shutdown path.
        // `faults` stays alive here, so recv cannot return None.
        let reason = tokio::select! {
            Some(fault) = fault_rx.recv() => ShutdownReason::from(fault),
            _ = shutdown_signal() => {
                info!("received shutdown signal, exiting");
                ShutdownReason::Signal
            }
        };

        let _ = shutdown_tx.send(true);

        let drain = async {
            let _ = (&mut server_handle).await;
            let _ = (&mut poll_handle).await;
        };
        if tokio::time::timeout(SHUTDOWN_GRACE, drain).await.is_err() {
            warn!("shutdown grace period elapsed, closing metrics server");
            server_handle.abort();
            poll_handle.abort();
        }

        Ok(reason)
    }
}

/// Wait for an operator interrupt or terminate signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
