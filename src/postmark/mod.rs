//! Postmark API adapter.
//!
//! HTTP client and response types for the Postmark statistics endpoints.

mod client;
mod types;

pub use client::Client;
pub use types::{BounceDay, BounceStats, OutboundStats};
