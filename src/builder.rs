//! Trap builders: turn a [`Notification`] into a trap [`Pdu`].
//!
//! [`AmbariTrapBuilder`] encodes alert notifications under the Apache Ambari
//! OID namespace (see [`schema`](crate::schema)). Each trap carries:
//!
//! 1. `snmpTrapOID.0` bound to `apacheAmbariTraps` (`1.3.6.1.4.1.18060.16.0`)
//! 2. one OCTET STRING binding per alert entry column, in column order
//!
//! # Null Encoding
//!
//! Absent alert attributes are bound to the literal string `null`. The
//! binding is never omitted, so every trap has the same arity and every
//! column OID carries an OCTET STRING, which is what MIB-driven managers
//! expect.
//!
//! # Failure Policy
//!
//! Building never fails. A notification that is not an alert is logged and
//! answered with an empty PDU, so one bad item cannot abort a dispatch batch.
//!
//! # Example
//!
//! ```rust
//! use ambari_snmp_trap::{AlertInfo, AlertState, AmbariTrapBuilder, DispatchConfig, Notification, TrapBuilder, Version};
//!
//! let builder = AmbariTrapBuilder::new(DispatchConfig::try_new(162)?);
//! let alert = AlertInfo::new()
//!     .definition_id(42)
//!     .alert_state(AlertState::Critical)
//!     .host_name("node1");
//!
//! let pdu = builder.build_trap(&Notification::alert(alert), Version::V2c);
//! assert_eq!(pdu.len(), 10);
//! # Ok::<(), ambari_snmp_trap::Error>(())
//! ```

use crate::config::{DispatchConfig, PORT_PROPERTY};
use crate::notification::{AlertInfo, Notification};
use crate::pdu::Pdu;
use crate::schema::{self, ALERT_FIELDS};
use crate::value::Value;
use crate::version::Version;

/// Target type served by [`AmbariTrapBuilder`].
pub const AMBARI_SNMP_TARGET_TYPE: &str = "AMBARI_SNMP";

/// Value bound for an absent alert attribute.
pub const NULL_LITERAL: &str = "null";

/// Builds trap PDUs for one alert target type.
///
/// The dispatch service picks a builder by [`target_type`](TrapBuilder::target_type)
/// and validates [`required_properties`](TrapBuilder::required_properties)
/// before constructing it.
///
/// # Thread Safety
///
/// Builders must be `Send + Sync`: the dispatch service shares one instance
/// across all of its workers. `build_trap` takes `&self` and must not keep
/// state between calls.
pub trait TrapBuilder: Send + Sync {
    /// Stable name used to register and look up this builder.
    fn target_type(&self) -> &'static str;

    /// Dispatch properties that must be present before construction.
    fn required_properties(&self) -> &'static [&'static str];

    /// Build the trap for `notification` using `version`.
    ///
    /// Never fails; unusable input produces an empty PDU.
    fn build_trap(&self, notification: &Notification, version: Version) -> Pdu;
}

/// Trap builder using the predefined Ambari OIDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbariTrapBuilder {
    config: DispatchConfig,
}

impl AmbariTrapBuilder {
    /// Properties [`AmbariTrapBuilder`] cannot be built without.
    pub const REQUIRED_PROPERTIES: &'static [&'static str] = &[PORT_PROPERTY];

    /// Create a builder from validated dispatch settings.
    ///
    /// A [`DispatchConfig`] always holds a usable port, so the builder is
    /// ready as soon as it exists.
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    /// Settings this builder was constructed with.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Destination port of the trap receiver.
    pub fn port(&self) -> u16 {
        self.config.port.get()
    }

    /// Build the trap using the version from this builder's settings.
    pub fn build(&self, notification: &Notification) -> Pdu {
        self.build_trap(notification, self.config.version)
    }
}

impl TrapBuilder for AmbariTrapBuilder {
    fn target_type(&self) -> &'static str {
        AMBARI_SNMP_TARGET_TYPE
    }

    fn required_properties(&self) -> &'static [&'static str] {
        Self::REQUIRED_PROPERTIES
    }

    fn build_trap(&self, notification: &Notification, version: Version) -> Pdu {
        let mut pdu = Pdu::new(version);

        let alert_info = match notification {
            Notification::Alert(alert) => &alert.alert_info,
            other => {
                tracing::error!(target: "ambari_snmp_trap::builder", { notification_type = %other.notification_type() }, "notification is not an alert, returning empty PDU");
                return pdu;
            }
        };

        pdu.push(schema::snmp_trap_oid(), Value::ObjectIdentifier(schema::traps_root()));
        push_alert_fields(&mut pdu, alert_info);

        tracing::trace!(target: "ambari_snmp_trap::builder", { version = %version, pdu_type = %pdu.pdu_type, varbinds = pdu.len() }, "built Ambari trap");
        pdu
    }
}

/// Append one binding per alert entry column, in column order.
fn push_alert_fields(pdu: &mut Pdu, alert_info: &AlertInfo) {
    for spec in &ALERT_FIELDS {
        pdu.push(spec.oid(), encode_field_value(alert_info.field_value(spec.field)));
    }
}

/// Encode an alert attribute as an OCTET STRING.
///
/// Absent values become the literal string `null`. A state that is really
/// named "null" is indistinguishable from an absent one on the manager side.
///
/// # Examples
///
/// ```
/// use ambari_snmp_trap::builder::encode_field_value;
///
/// assert_eq!(encode_field_value(Some("node1".into())).as_str(), Some("node1"));
/// assert_eq!(encode_field_value(None).as_str(), Some("null"));
/// ```
pub fn encode_field_value(value: Option<String>) -> Value {
    match value {
        Some(s) => Value::from(s),
        None => Value::from(NULL_LITERAL),
    }
}
