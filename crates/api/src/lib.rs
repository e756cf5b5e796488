//! Alert Relay API Server
//!
//! Webhook endpoint that receives monitoring alerts, enriches pod
//! crash-loop alerts with live resource utilization from Prometheus, and
//! forwards a formatted summary to Slack.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod routes;

pub use config::{RelayConfig, DEFAULT_LISTEN_ADDR};
pub use routes::alert::HANDLED_ALERTNAME;

use enrichment::{Enricher, PrometheusClient};
use notifier::SlackNotifier;

/// Application state shared across handlers.
///
/// Everything here is read-only after startup, so concurrent requests
/// share it without locking.
pub struct AppState {
    /// Metrics enrichment backed by Prometheus
    pub enricher: Enricher,
    /// Slack webhook delivery
    pub notifier: SlackNotifier,
}

impl AppState {
    /// Build the shared state from loaded configuration
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            enricher: Enricher::new(PrometheusClient::new(config.prometheus_url.clone())),
            notifier: SlackNotifier::new(config.slack_webhook_url.clone()),
        }
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/alert", post(routes::alert::receive_alert))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server until the process is terminated
pub async fn run_server(config: RelayConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.prometheus_url.is_none() {
        warn!("PROMETHEUS_URL not set; utilization fields will be reported as N/A");
    }
    if config.slack_webhook_url.is_none() {
        warn!("SLACK_WEBHOOK_URL not set; notifications will be dropped");
    }

    let state = Arc::new(AppState::new(&config));
    let app = create_router(state);

    info!("Starting alert relay on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
