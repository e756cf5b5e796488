//! Enrichment Error Types

use thiserror::Error;

/// Errors while querying the metrics backend.
///
/// These never cross the enrichment boundary: the query client logs them
/// and maps every one to an unavailable value.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// No metrics backend address configured
    #[error("Prometheus base URL not configured")]
    NotConfigured,

    /// Transport-level failure or undecodable body
    #[error("Prometheus request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Prometheus returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// Sample value was not a parsable number
    #[error("Unparsable sample value: {0}")]
    BadSample(String),
}
