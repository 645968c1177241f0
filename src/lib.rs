//! Postmark exporter - Prometheus metrics for Postmark email delivery.
//!
//! This crate polls the Postmark HTTP API for outbound delivery and bounce
//! statistics on a fixed interval and republishes them as Prometheus gauges
//! on a `/metrics` scrape endpoint.
//!
//! # Architecture
//!
//! Three concurrent activities share the process:
//!
//! - **`app::Poller`** - fetches both statistic sets each interval and
//!   projects them into the gauge registry; stops on the first fetch failure
//! - **`app::serve`** - the metrics HTTP server, always answering scrapes
//!   with whatever the last successful poll produced
//! - **`app::App`** - the shutdown coordinator: waits for the first of an
//!   operator signal or a background fault and drives a bounded shutdown
//!
//! The loops communicate only through a shared cancellation signal and a
//! single-slot, first-writer-wins fault channel.
//!
//! # Modules
//!
//! - [`config`] - Configuration from environment variables
//! - [`error`] - Error types for the crate
//! - [`metrics`] - The gauge registry and text exposition
//! - [`port`] - Trait definition for the statistics source
//! - [`postmark`] - Postmark API client and response types
//! - [`app`] - Application orchestration and lifecycle

pub mod app;
pub mod config;
pub mod error;
pub mod metrics;
pub mod port;
pub mod postmark;
