//! HTTP Routes

pub mod alert;
