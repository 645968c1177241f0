//! Postmark API response types.
//!
//! Field names follow the PascalCase keys of the Postmark JSON payloads.
//! Fields absent from a response decode to zero.

use serde::Deserialize;

/// Aggregate outbound delivery statistics for a server.
///
/// Returned by `GET /stats/outbound`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundStats {
    pub sent: i64,
    pub bounced: i64,
    #[serde(rename = "SMTPApiErrors")]
    pub smtp_api_errors: i64,
    pub bounce_rate: f64,
    pub spam_complaints: i64,
    pub spam_complaints_rate: f64,
    pub opens: i64,
    pub unique_opens: i64,
    pub tracked: i64,
    pub with_link_tracking: i64,
    pub with_open_tracking: i64,
    pub total_tracked_links_sent: i64,
    pub unique_links_clicked: i64,
    pub total_clicks: i64,
    pub with_client_recorded: i64,
    pub with_platform_recorded: i64,
}

/// Aggregate bounce counts for a server, with a per-day breakdown.
///
/// Returned by `GET /stats/outbound/bounces`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceStats {
    pub days: Vec<BounceDay>,
    pub hard_bounce: i64,
    pub soft_bounce: i64,
    pub transient: i64,
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
}

/// Bounce counts for a single day.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceDay {
    pub date: String,
    pub hard_bounce: i64,
    pub soft_bounce: i64,
    pub transient: i64,
    #[serde(rename = "SMTPApiError")]
    pub smtp_api_error: i64,
}
