//! Configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

const DEFAULT_POLLING_INTERVAL: &str = "15s";

/// Runtime configuration, read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postmark server API token, sent with every stats request.
    pub server_token: String,
    /// How often the poll loop fetches fresh statistics.
    pub polling_interval: Duration,
    /// Address the metrics server listens on.
    pub listen_addr: SocketAddr,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `POSTMARK_SERVER_TOKEN` is required and must be non-empty.
    /// `POSTMARK_POLLING_INTERVAL` is an optional duration string such as
    /// `15s` or `2m30s`.
    pub fn from_env() -> Result<Self> {
        let server_token = env::var("POSTMARK_SERVER_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingField {
                field: "POSTMARK_SERVER_TOKEN",
            })?;

        let interval = env::var("POSTMARK_POLLING_INTERVAL")
            .unwrap_or_else(|_| DEFAULT_POLLING_INTERVAL.to_string());
        let polling_interval =
            humantime::parse_duration(&interval).map_err(|err| ConfigError::InvalidValue {
                field: "POSTMARK_POLLING_INTERVAL",
                reason: err.to_string(),
            })?;
        if polling_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "POSTMARK_POLLING_INTERVAL",
                reason: "interval must be positive".into(),
            }
            .into());
        }

        Ok(Self {
            server_token,
            polling_interval,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            logging: LoggingConfig::default(),
        })
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "json".into(),
        }
    }
}
