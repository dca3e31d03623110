//! Notifications handed to trap builders by the dispatch service.
//!
//! A [`Notification`] is a tagged union. Only the [`Notification::Alert`]
//! variant carries an [`AlertInfo`] that can be encoded as an Ambari trap;
//! other variants are valid values that builders must tolerate.

use crate::schema::AlertField;

/// State of an alert instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum AlertState {
    Ok,
    Warning,
    Critical,
    Unknown,
    /// The check was skipped and produced no result.
    Skipped,
}

impl AlertState {
    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
            Self::Skipped => "SKIPPED",
        }
    }
}

impl std::fmt::Display for AlertState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The alert record encoded into a trap.
///
/// Every attribute is optional; absent attributes are still bound in the
/// trap (see [`encode_field_value`](crate::builder::encode_field_value)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct AlertInfo {
    pub definition_id: Option<i64>,
    pub definition_name: Option<String>,
    pub definition_hash: Option<String>,
    pub alert_name: Option<String>,
    pub alert_text: Option<String>,
    pub alert_state: Option<AlertState>,
    pub host_name: Option<String>,
    pub service_name: Option<String>,
    pub component_name: Option<String>,
}

impl AlertInfo {
    /// Create an alert record with every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alert definition id.
    pub fn definition_id(mut self, id: i64) -> Self {
        self.definition_id = Some(id);
        self
    }

    /// Set the alert definition name.
    pub fn definition_name(mut self, name: impl Into<String>) -> Self {
        self.definition_name = Some(name.into());
        self
    }

    /// Set the alert definition hash.
    pub fn definition_hash(mut self, hash: impl Into<String>) -> Self {
        self.definition_hash = Some(hash.into());
        self
    }

    /// Set the alert label.
    pub fn alert_name(mut self, name: impl Into<String>) -> Self {
        self.alert_name = Some(name.into());
        self
    }

    /// Set the alert text.
    pub fn alert_text(mut self, text: impl Into<String>) -> Self {
        self.alert_text = Some(text.into());
        self
    }

    /// Set the alert state.
    pub fn alert_state(mut self, state: AlertState) -> Self {
        self.alert_state = Some(state);
        self
    }

    /// Set the host name.
    pub fn host_name(mut self, host: impl Into<String>) -> Self {
        self.host_name = Some(host.into());
        self
    }

    /// Set the service name.
    pub fn service_name(mut self, service: impl Into<String>) -> Self {
        self.service_name = Some(service.into());
        self
    }

    /// Set the component name.
    pub fn component_name(mut self, component: impl Into<String>) -> Self {
        self.component_name = Some(component.into());
        self
    }

    /// Canonical string form of one attribute, or `None` if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::{AlertField, AlertInfo, AlertState};
    ///
    /// let info = AlertInfo::new().definition_id(42).alert_state(AlertState::Critical);
    /// assert_eq!(info.field_value(AlertField::DefinitionId).as_deref(), Some("42"));
    /// assert_eq!(info.field_value(AlertField::AlertState).as_deref(), Some("CRITICAL"));
    /// assert_eq!(info.field_value(AlertField::HostName), None);
    /// ```
    pub fn field_value(&self, field: AlertField) -> Option<String> {
        match field {
            AlertField::DefinitionId => self.definition_id.map(|id| id.to_string()),
            AlertField::DefinitionName => self.definition_name.clone(),
            AlertField::DefinitionHash => self.definition_hash.clone(),
            AlertField::AlertName => self.alert_name.clone(),
            AlertField::AlertText => self.alert_text.clone(),
            AlertField::AlertState => self.alert_state.map(|s| s.as_str().to_owned()),
            AlertField::HostName => self.host_name.clone(),
            AlertField::ServiceName => self.service_name.clone(),
            AlertField::ComponentName => self.component_name.clone(),
        }
    }
}

/// Discriminant of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Generic,
    Alert,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generic => write!(f, "GENERIC"),
            Self::Alert => write!(f, "ALERT"),
        }
    }
}

/// Free-form notification with a subject and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericNotification {
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// Notification raised for a single alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertNotification {
    pub subject: Option<String>,
    pub body: Option<String>,
    pub alert_info: AlertInfo,
}

impl AlertNotification {
    /// Wrap an alert record.
    pub fn new(alert_info: AlertInfo) -> Self {
        Self {
            alert_info,
            ..Default::default()
        }
    }
}

/// Notification delivered by the dispatch service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Notification {
    Generic(GenericNotification),
    Alert(AlertNotification),
}

impl Notification {
    /// Create an alert notification.
    pub fn alert(alert_info: AlertInfo) -> Self {
        Self::Alert(AlertNotification::new(alert_info))
    }

    /// Create a generic notification.
    pub fn generic(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Generic(GenericNotification {
            subject: Some(subject.into()),
            body: Some(body.into()),
        })
    }

    /// Discriminant of this notification.
    pub fn notification_type(&self) -> NotificationType {
        match self {
            Self::Generic(_) => NotificationType::Generic,
            Self::Alert(_) => NotificationType::Alert,
        }
    }

    /// Subject line, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Generic(n) => n.subject.as_deref(),
            Self::Alert(n) => n.subject.as_deref(),
        }
    }

    /// Body text, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Generic(n) => n.body.as_deref(),
            Self::Alert(n) => n.body.as_deref(),
        }
    }

    /// Alert record carried by an alert notification.
    pub fn alert_info(&self) -> Option<&AlertInfo> {
        match self {
            Self::Alert(n) => Some(&n.alert_info),
            _ => None,
        }
    }
}

impl From<AlertInfo> for Notification {
    fn from(alert_info: AlertInfo) -> Self {
        Self::alert(alert_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ALERT_FIELDS;

    #[test]
    fn test_alert_state_names() {
        assert_eq!(AlertState::Ok.to_string(), "OK");
        assert_eq!(AlertState::Warning.to_string(), "WARNING");
        assert_eq!(AlertState::Critical.to_string(), "CRITICAL");
        assert_eq!(AlertState::Unknown.to_string(), "UNKNOWN");
        assert_eq!(AlertState::Skipped.to_string(), "SKIPPED");
    }

    #[test]
    fn test_empty_alert_has_no_field_values() {
        let info = AlertInfo::new();
        for spec in &ALERT_FIELDS {
            assert_eq!(info.field_value(spec.field), None);
        }
    }

    #[test]
    fn test_field_values() {
        let info = AlertInfo::new()
            .definition_id(-3)
            .definition_name("disk_usage")
            .definition_hash("abc123")
            .alert_name("Disk Usage")
            .alert_text("92% used")
            .alert_state(AlertState::Warning)
            .host_name("node1")
            .service_name("HDFS")
            .component_name("DATANODE");

        let values: Vec<String> = ALERT_FIELDS
            .iter()
            .map(|spec| info.field_value(spec.field).unwrap())
            .collect();
        assert_eq!(
            values,
            [
                "-3",
                "disk_usage",
                "abc123",
                "Disk Usage",
                "92% used",
                "WARNING",
                "node1",
                "HDFS",
                "DATANODE"
            ]
        );
    }

    #[test]
    fn test_notification_accessors() {
        let alert = Notification::alert(AlertInfo::new().host_name("node1"));
        assert_eq!(alert.notification_type(), NotificationType::Alert);
        assert_eq!(alert.alert_info().and_then(|i| i.host_name.as_deref()), Some("node1"));
        assert_eq!(alert.subject(), None);

        let generic = Notification::generic("subject", "body");
        assert_eq!(generic.notification_type(), NotificationType::Generic);
        assert_eq!(generic.subject(), Some("subject"));
        assert_eq!(generic.body(), Some("body"));
        assert!(generic.alert_info().is_none());
    }

    #[test]
    fn test_notification_type_display() {
        assert_eq!(NotificationType::Alert.to_string(), "ALERT");
        assert_eq!(NotificationType::Generic.to_string(), "GENERIC");
    }
}
