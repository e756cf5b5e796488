//! Metrics Enrichment
//!
//! Queries Prometheus for the live resource utilization of an alerted pod
//! and formats the results for human-readable notifications. Every failure
//! mode collapses to an "N/A" field: enrichment never fails a request.

mod client;
mod enricher;
mod error;

pub use client::PrometheusClient;
pub use enricher::{EnrichedAlert, Enricher, ResourceUtilization, UNAVAILABLE};
pub use error::EnrichError;
