//! Periodic statistics poll loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use super::fault::{Fault, FaultSender};
use crate::metrics::PostmarkMetrics;
use crate::port::StatsSource;

/// Fetches both statistic sets on a fixed interval and records them.
///
/// The first fetch failure is reported once and stops the loop permanently;
/// it never retries.
pub struct Poller<S> {
    source: S,
    metrics: Arc<PostmarkMetrics>,
    interval: Duration,
}

impl<S: StatsSource> Poller<S> {
    pub fn new(source: S, metrics: Arc<PostmarkMetrics>, interval: Duration) -> Self {
        Self {
            source,
            metrics,
            interval,
        }
    }

    /// Run until cancelled or until the first fetch failure.
    ///
    /// A failure is handed to `faults` before returning; cancellation
    /// reports nothing.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>, faults: FaultSender) {
        info!(interval = ?self.interval, "starting poll loop");

        let mut tick = tokio::time::interval(self.interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; the first fetch happens one
        // full interval after start.
        tick.tick().await;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("stopping poll loop");
                        return;
                    }
                }
                _ = tick.tick() => {
                    if let Err(fault) = self.poll_once().await {
                        faults.report(fault);
                        return;
                    }
                }
            }
        }
    }

    /// One poll cycle: fetch both snapshots, then record both.
    ///
    /// No gauge is touched unless both fetches succeed, and the bounce fetch
    /// is skipped entirely when the outbound fetch fails.
    async fn poll_once(&self) -> std::result::Result<(), Fault> {
        let outbound = match self.source.outbound_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                error!(error = %err, "failed to fetch outbound stats");
                return Err(Fault::Poll(err));
            }
        };

        let bounces = match self.source.bounce_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                error!(error = %err, "failed to fetch bounce stats");
                return Err(Fault::Poll(err));
            }
        };

        self.metrics.record(&outbound, &bounces);
        info!("metrics updated");
        Ok(())
    }
}
