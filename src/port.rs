//! Statistics source port.
//!
//! Defines the interface the poll loop consumes for fetching statistics.

use async_trait::async_trait;

use crate::error::Result;
use crate::postmark::{BounceStats, OutboundStats};

/// Read-only source of delivery and bounce statistics.
///
/// Implemented by the Postmark HTTP client; poller tests substitute
/// scripted sources for the remote API.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch aggregate outbound delivery statistics.
    async fn outbound_stats(&self) -> Result<OutboundStats>;

    /// Fetch aggregate bounce statistics.
    async fn bounce_stats(&self) -> Result<BounceStats>;
}
