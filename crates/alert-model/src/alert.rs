//! Alert Payload Types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AlertError;

/// A single alert notification as delivered by the monitoring system.
///
/// Mirrors the Alertmanager alert shape: two flat string maps. Unknown
/// top-level keys (`status`, `startsAt`, ...) are ignored. A missing map
/// deserializes as empty so that validation reports the missing field
/// rather than rejecting the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Identifying labels (`alertname`, `namespace`, `pod`, `severity`, ...)
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Free-form annotations (`summary`, `description`, `runbook_url`, ...)
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Alert {
    /// Label value by key, if present
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Annotation value by key, if present
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// The alert name used for routing decisions
    pub fn alertname(&self) -> Result<&str, AlertError> {
        self.label("alertname")
            .ok_or(AlertError::MissingField("labels.alertname"))
    }

    /// Namespace of the affected workload, if labeled
    pub fn namespace(&self) -> Option<&str> {
        self.label("namespace")
    }

    /// Pod name of the affected workload, if labeled
    pub fn pod(&self) -> Option<&str> {
        self.label("pod")
    }

    /// Extract the fields a notification message is built from.
    ///
    /// Fails on the first missing field so the caller can reject the
    /// payload before issuing any outbound call.
    pub fn notification_fields(&self) -> Result<NotificationFields, AlertError> {
        let summary = self
            .annotation("summary")
            .ok_or(AlertError::MissingField("annotations.summary"))?;
        let description = self
            .annotation("description")
            .ok_or(AlertError::MissingField("annotations.description"))?;
        let severity = self
            .label("severity")
            .ok_or(AlertError::MissingField("labels.severity"))?;

        Ok(NotificationFields {
            summary: summary.to_string(),
            description: description.to_string(),
            severity: severity.to_string(),
            runbook_url: self.annotation("runbook_url").map(str::to_string),
        })
    }
}

/// Message inputs validated out of an alert before enrichment begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationFields {
    /// `annotations.summary`
    pub summary: String,
    /// `annotations.description`
    pub description: String,
    /// `labels.severity`
    pub severity: String,
    /// `annotations.runbook_url`, if present
    pub runbook_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn crash_looping_payload() -> &'static str {
        r#"{
            "labels": {
                "alertname": "KubePodCrashLooping",
                "namespace": "ns1",
                "pod": "pod1",
                "severity": "critical"
            },
            "annotations": {
                "summary": "crash",
                "description": "desc"
            }
        }"#
    }

    #[test]
    fn test_deserialize_full_payload() {
        let alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();

        assert_eq!(alert.alertname().unwrap(), "KubePodCrashLooping");
        assert_eq!(alert.namespace(), Some("ns1"));
        assert_eq!(alert.pod(), Some("pod1"));
        assert_eq!(alert.label("severity"), Some("critical"));
        assert_eq!(alert.annotation("summary"), Some("crash"));
    }

    #[test]
    fn test_unknown_top_level_keys_ignored() {
        let alert: Alert = serde_json::from_str(
            r#"{"status":"firing","startsAt":"2024-01-01T00:00:00Z","labels":{"alertname":"X"}}"#,
        )
        .unwrap();

        assert_eq!(alert.alertname().unwrap(), "X");
        assert!(alert.annotations.is_empty());
    }

    #[test]
    fn test_missing_maps_deserialize_empty() {
        let alert: Alert = serde_json::from_str("{}").unwrap();

        assert!(alert.labels.is_empty());
        assert!(alert.annotations.is_empty());
        assert_eq!(
            alert.alertname(),
            Err(AlertError::MissingField("labels.alertname"))
        );
    }

    #[test]
    fn test_notification_fields_complete() {
        let mut alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();
        alert
            .annotations
            .insert("runbook_url".to_string(), "http://runbooks/crash".to_string());

        let fields = alert.notification_fields().unwrap();
        assert_eq!(fields.summary, "crash");
        assert_eq!(fields.description, "desc");
        assert_eq!(fields.severity, "critical");
        assert_eq!(fields.runbook_url.as_deref(), Some("http://runbooks/crash"));
    }

    #[test]
    fn test_notification_fields_runbook_optional() {
        let alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();
        let fields = alert.notification_fields().unwrap();
        assert!(fields.runbook_url.is_none());
    }

    #[test]
    fn test_notification_fields_reports_first_missing() {
        let mut alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();
        alert.annotations.remove("summary");
        assert_eq!(
            alert.notification_fields(),
            Err(AlertError::MissingField("annotations.summary"))
        );

        let mut alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();
        alert.annotations.remove("description");
        assert_eq!(
            alert.notification_fields(),
            Err(AlertError::MissingField("annotations.description"))
        );

        let mut alert: Alert = serde_json::from_str(crash_looping_payload()).unwrap();
        alert.labels.remove("severity");
        assert_eq!(
            alert.notification_fields(),
            Err(AlertError::MissingField("labels.severity"))
        );
    }

    #[test]
    fn test_error_message_names_dotted_path() {
        let err = AlertError::MissingField("labels.alertname");
        assert_eq!(err.to_string(), "missing required field: labels.alertname");
    }

    proptest! {
        #[test]
        fn prop_alertname_present_iff_labeled(
            mut labels in proptest::collection::hash_map("[a-z_]{1,12}", "[A-Za-z0-9_-]{0,16}", 0..6),
            name in "[A-Za-z]{1,16}",
            has_name: bool,
        ) {
            if has_name {
                labels.insert("alertname".to_string(), name.clone());
            } else {
                labels.remove("alertname");
            }
            let alert = Alert { labels, annotations: HashMap::new() };

            match alert.alertname() {
                Ok(value) => {
                    prop_assert!(has_name);
                    prop_assert_eq!(value, name.as_str());
                }
                Err(AlertError::MissingField(field)) => {
                    prop_assert!(!has_name);
                    prop_assert_eq!(field, "labels.alertname");
                }
            }
        }

        #[test]
        fn prop_notification_fields_require_all_three(
            summary in proptest::option::of("[ -~]{0,32}"),
            description in proptest::option::of("[ -~]{0,32}"),
            severity in proptest::option::of("[a-z]{1,12}"),
        ) {
            let mut alert = Alert::default();
            if let Some(s) = &summary {
                alert.annotations.insert("summary".to_string(), s.clone());
            }
            if let Some(d) = &description {
                alert.annotations.insert("description".to_string(), d.clone());
            }
            if let Some(sev) = &severity {
                alert.labels.insert("severity".to_string(), sev.clone());
            }

            let complete = summary.is_some() && description.is_some() && severity.is_some();
            prop_assert_eq!(alert.notification_fields().is_ok(), complete);
        }
    }
}
