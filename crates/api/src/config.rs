//! Relay Configuration
//!
//! Runtime settings loaded from environment variables. Handlers receive
//! these through [`crate::AppState`] rather than reading the process
//! environment themselves.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Address the webhook endpoint listens on unless overridden
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

/// Runtime configuration for the relay
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Bind address for the HTTP server
    pub listen_addr: String,
    /// Base URL of the Prometheus server, e.g. `http://prometheus-server:9090`
    pub prometheus_url: Option<String>,
    /// Slack incoming-webhook URL notifications are posted to
    pub slack_webhook_url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            prometheus_url: None,
            slack_webhook_url: None,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `LISTEN_ADDR`, `PROMETHEUS_URL` and `SLACK_WEBHOOK_URL`.
    /// Unset integration URLs are allowed; the relay then logs and skips
    /// the corresponding outbound call.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }
}
