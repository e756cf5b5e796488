//! Alert Webhook Route
//!
//! The single POST endpoint of the relay. Crash-loop alerts are enriched
//! with live utilization data and forwarded to Slack; everything else is
//! acknowledged and dropped.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use alert_model::{Alert, AlertError, NotificationFields};
use enrichment::{ResourceUtilization, UNAVAILABLE};

use crate::AppState;

/// The only alertname the relay acts on, matched exactly
pub const HANDLED_ALERTNAME: &str = "KubePodCrashLooping";

/// Acknowledgement body for accepted webhook deliveries
#[derive(Debug, Serialize)]
pub struct AlertAck {
    /// `"success"` when the alert was handled, `"ignored"` when it was not ours
    pub status: &'static str,
}

/// Rejection body for payloads missing required fields
#[derive(Debug, Serialize)]
pub struct AlertRejection {
    pub status: &'static str,
    /// Names the missing field by its dotted path
    pub error: String,
}

/// Receive a single alert webhook.
///
/// Crash-loop alerts are validated, enriched and forwarded. The response
/// reports success once the alert matched, regardless of downstream
/// outcome, so senders never retry on integration trouble.
pub async fn receive_alert(
    State(state): State<Arc<AppState>>,
    Json(alert): Json<Alert>,
) -> Response {
    info!("Received alert: {:?}", alert);

    let name = match alert.alertname() {
        Ok(name) => name,
        Err(err) => return reject(err),
    };

    if name != HANDLED_ALERTNAME {
        info!("Ignoring alert: {}", name);
        return ack("ignored");
    }

    // Validate everything the message needs before any outbound call
    let fields = match alert.notification_fields() {
        Ok(fields) => fields,
        Err(err) => return reject(err),
    };

    let enriched = state.enricher.enrich(alert).await;
    info!("Enriched alert data: {:?}", enriched);

    let message = render_message(&fields, &enriched.utilization);
    state.notifier.notify(&message).await;

    ack("success")
}

fn ack(status: &'static str) -> Response {
    (StatusCode::OK, Json(AlertAck { status })).into_response()
}

fn reject(err: AlertError) -> Response {
    warn!("Rejecting alert: {}", err);
    (
        StatusCode::BAD_REQUEST,
        Json(AlertRejection {
            status: "error",
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Compose the six-line notification body
fn render_message(fields: &NotificationFields, utilization: &ResourceUtilization) -> String {
    format!(
        "Alert: {}\nDescription: {}\nCPU Utilization: {}\nMemory Utilization: {}\nSeverity: {}\nRunbook URL: {}",
        fields.summary,
        fields.description,
        utilization.cpu_utilization,
        utilization.memory_utilization,
        fields.severity,
        fields.runbook_url.as_deref().unwrap_or(UNAVAILABLE),
    )
}
