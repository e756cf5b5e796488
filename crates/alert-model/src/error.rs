//! Alert Payload Error Types

use thiserror::Error;

/// Errors raised while reading fields from an inbound alert payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    /// Required field absent from the payload, named by its dotted path
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
