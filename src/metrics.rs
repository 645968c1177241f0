//! Gauge registry for Postmark statistics.
//!
//! One gauge per exported field. Gauges reflect the values of the last
//! successfully completed poll cycle; both snapshots are recorded together
//! so a scrape never observes a cycle that only half-applied.

use prometheus::{Gauge, IntGauge, Registry, TextEncoder};

use crate::error::Result;
use crate::postmark::{BounceStats, OutboundStats};

/// The fixed set of gauges published on the scrape endpoint.
pub struct PostmarkMetrics {
    registry: Registry,
    sent: IntGauge,
    bounced: IntGauge,
    smtp_api_errors: IntGauge,
    bounce_rate: Gauge,
    spam_complaints: IntGauge,
    spam_complaints_rate: Gauge,
    opens: IntGauge,
    unique_opens: IntGauge,
    tracked: IntGauge,
    with_link_tracking: IntGauge,
    with_open_tracking: IntGauge,
    total_tracked_links_sent: IntGauge,
    total_clicks: IntGauge,
    hard_bounced: IntGauge,
    soft_bounced: IntGauge,
    transient_bounced: IntGauge,
}

fn int_gauge(registry: &Registry, name: &str, help: &str) -> Result<IntGauge> {
    let gauge = IntGauge::new(name, help)?;
    registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

fn float_gauge(registry: &Registry, name: &str, help: &str) -> Result<Gauge> {
    let gauge = Gauge::new(name, help)?;
    registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

impl PostmarkMetrics {
    /// Build the registry with all gauges registered and at zero.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        Ok(Self {
            sent: int_gauge(&registry, "postmark_sent_total", "Total number of sent emails")?,
            bounced: int_gauge(
                &registry,
                "postmark_bounced_total",
                "Total number of bounced emails",
            )?,
            smtp_api_errors: int_gauge(
                &registry,
                "postmark_smtp_api_errors_total",
                "Total number of SMTP API errors",
            )?,
            bounce_rate: float_gauge(
                &registry,
                "postmark_bounce_rate",
                "Bounce rate of sent emails",
            )?,
            spam_complaints: int_gauge(
                &registry,
                "postmark_spam_complaints_total",
                "Total number of spam complaints",
            )?,
            spam_complaints_rate: float_gauge(
                &registry,
                "postmark_spam_complaints_rate",
                "Rate of spam complaints",
            )?,
            opens: int_gauge(
                &registry,
                "postmark_opens_total",
                "Total number of email opens",
            )?,
            unique_opens: int_gauge(
                &registry,
                "postmark_unique_opens_total",
                "Total number of unique email opens",
            )?,
            tracked: int_gauge(
                &registry,
                "postmark_tracked_total",
                "Total number of tracked emails",
            )?,
            with_link_tracking: int_gauge(
                &registry,
                "postmark_with_link_tracking_total",
                "Total number of emails with link tracking enabled",
            )?,
            with_open_tracking: int_gauge(
                &registry,
                "postmark_with_open_tracking_total",
                "Total number of emails with open tracking enabled",
            )?,
            total_tracked_links_sent: int_gauge(
                &registry,
                "postmark_total_tracked_links_sent",
                "Total number of tracked links sent in emails",
            )?,
            total_clicks: int_gauge(
                &registry,
                "postmark_total_clicks",
                "Total number of clicks on tracked links in emails",
            )?,
            hard_bounced: int_gauge(
                &registry,
                "postmark_hard_bounced_total",
                "Total number of hard bounced emails",
            )?,
            soft_bounced: int_gauge(
                &registry,
                "postmark_soft_bounced_total",
                "Total number of soft bounced emails",
            )?,
            transient_bounced: int_gauge(
                &registry,
                "postmark_transient_bounced_total",
                "Total number of transient bounced emails",
            )?,
            registry,
        })
    }

    /// Project one completed poll cycle into the gauges.
    ///
    /// Callers must have both snapshots in hand; a cycle where either fetch
    /// failed is never recorded.
    pub fn record(&self, outbound: &OutboundStats, bounces: &BounceStats) {
        self.sent.set(outbound.sent);
        self.bounced.set(outbound.bounced);
        self.smtp_api_errors.set(outbound.smtp_api_errors);
        self.bounce_rate.set(outbound.bounce_rate);
        self.spam_complaints.set(outbound.spam_complaints);
        self.spam_complaints_rate.set(outbound.spam_complaints_rate);
        self.opens.set(outbound.opens);
        self.unique_opens.set(outbound.unique_opens);
        self.tracked.set(outbound.tracked);
        self.with_link_tracking.set(outbound.with_link_tracking);
        self.with_open_tracking.set(outbound.with_open_tracking);
        self.total_tracked_links_sent
            .set(outbound.total_tracked_links_sent);
        self.total_clicks.set(outbound.total_clicks);
        self.hard_bounced.set(bounces.hard_bounce);
        self.soft_bounced.set(bounces.soft_bounce);
        self.transient_bounced.set(bounces.transient);
    }

    /// Render all gauges in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        Ok(encoder.encode_to_string(&self.registry.gather())?)
    }
}
