//! Inbound Alert Model
//!
//! Payload types for alert notifications received over the webhook
//! endpoint, with validated access to the fields the relay depends on.

mod alert;
mod error;

pub use alert::{Alert, NotificationFields};
pub use error::AlertError;
