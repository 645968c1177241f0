//! Postmark REST API client.
//!
//! Provides HTTP client functionality for fetching outbound delivery and
//! bounce statistics from the Postmark server API.

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{BounceStats, OutboundStats};
use crate::error::{Error, Result};
use crate::port::StatsSource;

const DEFAULT_BASE_URL: &str = "https://api.postmarkapp.com";
const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// HTTP client for the Postmark server API.
///
/// Issues read-only, token-authenticated requests against the statistics
/// endpoints. No retries and no caching; a non-200 response or a decode
/// failure is an error.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    server_token: String,
}

impl Client {
    /// Create a new client against the production Postmark API.
    #[must_use]
    pub fn new(server_token: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), server_token)
    }

    /// Create a new client with an explicit base URL.
    #[must_use]
    pub fn with_base_url(base_url: String, server_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            server_token,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "fetching statistics");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(SERVER_TOKEN_HEADER, &self.server_token)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StatsSource for Client {
    async fn outbound_stats(&self) -> Result<OutboundStats> {
        self.get_json("/stats/outbound").await
    }

    async fn bounce_stats(&self) -> Result<BounceStats> {
        self.get_json("/stats/outbound/bounces").await
    }
}
