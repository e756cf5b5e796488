//! Notification Delivery
//!
//! Sends formatted alert messages to a Slack-compatible incoming webhook.
//! Delivery is fire-and-forget from the caller's perspective: every failure
//! is logged and absorbed, never propagated, and nothing is retried.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Notification delivery error types
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No webhook URL configured
    #[error("Slack webhook URL not configured")]
    NotConfigured,

    /// Transport-level failure
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Webhook answered with a non-200 status
    #[error("Webhook returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Outbound webhook payload
#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

/// Sends messages to a Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    /// Create a notifier for the given webhook URL.
    ///
    /// `None` disables delivery: `notify` logs an error and sends nothing.
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Whether a webhook URL is configured
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Send a message, absorbing every failure.
    ///
    /// Success (HTTP 200) is logged at info level; a missing URL, transport
    /// error, or non-200 response is logged at error level. The caller can
    /// not observe the outcome.
    pub async fn notify(&self, message: &str) {
        match self.deliver(message).await {
            Ok(()) => info!("Message sent to Slack successfully"),
            Err(NotifyError::NotConfigured) => {
                error!("Slack webhook URL not configured; dropping notification");
            }
            Err(e) => error!("Failed to send message to Slack: {}", e),
        }
    }

    async fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        let url = self
            .webhook_url
            .as_deref()
            .ok_or(NotifyError::NotConfigured)?;

        let response = self
            .http
            .post(url)
            .json(&SlackPayload { text: message })
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(NotifyError::BadStatus(status));
        }

        Ok(())
    }
}
