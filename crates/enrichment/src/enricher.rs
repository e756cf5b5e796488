//! Alert Enrichment
//!
//! Attaches live CPU and memory utilization to an alert, formatted for
//! direct inclusion in a notification message.

use alert_model::Alert;
use serde::Serialize;
use tracing::debug;

use crate::client::PrometheusClient;

/// Sentinel shown when a utilization value cannot be determined
pub const UNAVAILABLE: &str = "N/A";

/// Bytes per mebibyte, for memory display conversion
const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Formatted resource utilization for one pod
#[derive(Debug, Clone, Serialize)]
pub struct ResourceUtilization {
    /// e.g. `"1.23 cores"`, or `"N/A"`
    pub cpu_utilization: String,
    /// e.g. `"10.00 MiB"`, or `"N/A"`
    pub memory_utilization: String,
}

/// An alert together with the utilization fetched for it
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedAlert {
    /// The original alert, unchanged
    pub alert: Alert,
    /// Live utilization of the alerted pod
    pub utilization: ResourceUtilization,
}

/// Fetches and formats resource utilization for alerts
#[derive(Debug, Clone)]
pub struct Enricher {
    client: PrometheusClient,
}

impl Enricher {
    /// Create an enricher backed by the given query client
    pub fn new(client: PrometheusClient) -> Self {
        Self { client }
    }

    /// Whether a Prometheus base URL was configured
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Attach utilization data to an alert.
    ///
    /// Issues the CPU query, then the memory query, sequentially. Backend
    /// trouble shows up as "N/A" fields, never as an error.
    pub async fn enrich(&self, alert: Alert) -> EnrichedAlert {
        let namespace = alert.namespace().unwrap_or_default();
        let pod = alert.pod().unwrap_or_default();
        let utilization = self.fetch_utilization(namespace, pod).await;

        EnrichedAlert { alert, utilization }
    }

    /// Fetch CPU and memory utilization for one namespace/pod pair
    async fn fetch_utilization(&self, namespace: &str, pod: &str) -> ResourceUtilization {
        let cpu = self.client.query(&cpu_query(namespace, pod)).await;
        let memory = self.client.query(&memory_query(namespace, pod)).await;

        debug!(
            "Utilization for {}/{}: cpu={:?} memory_bytes={:?}",
            namespace, pod, cpu, memory
        );

        ResourceUtilization {
            cpu_utilization: format_cpu(cpu),
            memory_utilization: format_memory(memory),
        }
    }
}

/// CPU usage rate over the trailing five minutes, in cores
fn cpu_query(namespace: &str, pod: &str) -> String {
    format!(
        "sum(rate(container_cpu_usage_seconds_total{{namespace=\"{}\", pod=\"{}\"}}[5m]))",
        namespace, pod
    )
}

/// Instantaneous memory usage, in bytes
fn memory_query(namespace: &str, pod: &str) -> String {
    format!(
        "sum(container_memory_usage_bytes{{namespace=\"{}\", pod=\"{}\"}})",
        namespace, pod
    )
}

/// Format a core count to two decimals, or the sentinel
fn format_cpu(value: Option<f64>) -> String {
    match value {
        Some(cores) => format!("{:.2} cores", cores),
        None => UNAVAILABLE.to_string(),
    }
}

/// Format a byte count as mebibytes to two decimals, or the sentinel
fn format_memory(value: Option<f64>) -> String {
    match value {
        Some(bytes) => format!("{:.2} MiB", bytes / BYTES_PER_MIB),
        None => UNAVAILABLE.to_string(),
    }
}
