//! JSON input for the CLI tool.
//!
//! Two shapes are accepted:
//!
//! - a tagged notification: `{"type": "ALERT", "alertInfo": {...}}` or
//!   `{"type": "GENERIC", "subject": "...", "body": "..."}`
//! - a bare alert record: `{"definitionId": 42, "hostName": "node1", ...}`

use serde::Deserialize;

use crate::notification::{AlertInfo, AlertNotification, GenericNotification, Notification};

/// Tagged notification as written by the dispatch service.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
enum TaggedNotification {
    Alert {
        #[serde(default)]
        subject: Option<String>,
        #[serde(default)]
        body: Option<String>,
        #[serde(rename = "alertInfo", default)]
        alert_info: AlertInfo,
    },
    Generic {
        #[serde(default)]
        subject: Option<String>,
        #[serde(default)]
        body: Option<String>,
    },
}

impl From<TaggedNotification> for Notification {
    fn from(tagged: TaggedNotification) -> Self {
        match tagged {
            TaggedNotification::Alert {
                subject,
                body,
                alert_info,
            } => Notification::Alert(AlertNotification {
                subject,
                body,
                alert_info,
            }),
            TaggedNotification::Generic { subject, body } => {
                Notification::Generic(GenericNotification { subject, body })
            }
        }
    }
}

/// Parse a notification from JSON text.
pub fn parse_notification(text: &str) -> serde_json::Result<Notification> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    if json.get("type").is_some() {
        let tagged: TaggedNotification = serde_json::from_value(json)?;
        Ok(tagged.into())
    } else {
        let alert_info: AlertInfo = serde_json::from_value(json)?;
        Ok(Notification::alert(alert_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{AlertState, NotificationType};

    #[test]
    fn test_bare_alert_record() {
        let n = parse_notification(
            r#"{"definitionId": 42, "alertState": "CRITICAL", "hostName": "node1", "serviceName": null}"#,
        )
        .unwrap();
        let info = n.alert_info().unwrap();
        assert_eq!(info.definition_id, Some(42));
        assert_eq!(info.alert_state, Some(AlertState::Critical));
        assert_eq!(info.host_name.as_deref(), Some("node1"));
        assert_eq!(info.service_name, None);
        assert_eq!(info.component_name, None);
    }

    #[test]
    fn test_tagged_alert() {
        let n = parse_notification(
            r#"{"type": "ALERT", "subject": "disk", "alertInfo": {"alertName": "Disk Usage"}}"#,
        )
        .unwrap();
        assert_eq!(n.notification_type(), NotificationType::Alert);
        assert_eq!(n.subject(), Some("disk"));
        assert_eq!(
            n.alert_info().and_then(|i| i.alert_name.as_deref()),
            Some("Disk Usage")
        );
    }

    #[test]
    fn test_tagged_generic() {
        let n = parse_notification(r#"{"type": "GENERIC", "subject": "s", "body": "b"}"#).unwrap();
        assert_eq!(n.notification_type(), NotificationType::Generic);
        assert_eq!(n.body(), Some("b"));
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_notification("not json").is_err());
        assert!(parse_notification(r#"{"type": "EMAIL"}"#).is_err());
        assert!(parse_notification(r#"{"alertState": "BROKEN"}"#).is_err());
    }
}
