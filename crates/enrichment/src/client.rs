//! Prometheus Query Client
//!
//! Thin client for the Prometheus HTTP API instant-query endpoint.

use serde::Deserialize;
use tracing::{debug, error};

use crate::error::EnrichError;

/// Client for `GET {base}/api/v1/query`
#[derive(Debug, Clone)]
pub struct PrometheusClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

/// Response envelope for an instant query
#[derive(Debug, Default, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    data: QueryData,
}

#[derive(Debug, Default, Deserialize)]
struct QueryData {
    #[serde(default)]
    result: Vec<QuerySample>,
}

/// One time series in an instant-query result
#[derive(Debug, Deserialize)]
struct QuerySample {
    /// `[timestamp, "<value>"]` pair; the timestamp is ignored
    value: (f64, String),
}

impl PrometheusClient {
    /// Create a client for the given base URL (e.g. `http://prometheus-server:9090`).
    ///
    /// `None` disables querying: every query resolves to unavailable.
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Whether a backend address is configured
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Run an instant query and return the scalar value of the first series.
    ///
    /// Returns `None` when the result set is empty or the call fails for any
    /// reason: unconfigured backend, transport error, non-2xx status, or a
    /// malformed body. Failures are logged, never propagated.
    pub async fn query(&self, expr: &str) -> Option<f64> {
        match self.try_query(expr).await {
            Ok(value) => value,
            Err(e) => {
                error!("Error querying Prometheus: {}", e);
                None
            }
        }
    }

    async fn try_query(&self, expr: &str) -> Result<Option<f64>, EnrichError> {
        let base = self.base_url.as_deref().ok_or(EnrichError::NotConfigured)?;

        let response = self
            .http
            .get(format!("{}/api/v1/query", base))
            .query(&[("query", expr)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::BadStatus(status));
        }

        let body: QueryResponse = response.json().await?;
        let sample = match body.data.result.first() {
            Some(sample) => sample,
            None => {
                debug!("Query returned no series: {}", expr);
                return Ok(None);
            }
        };

        let value = sample
            .value
            .1
            .parse::<f64>()
            .map_err(|_| EnrichError::BadSample(sample.value.1.clone()))?;

        Ok(Some(value))
    }
}
