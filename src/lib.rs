//! # ambari-snmp-trap
//!
//! Encode Apache Ambari alert notifications as SNMP trap PDUs.
//!
//! Alerts are bound under the vendor OID `1.3.6.1.4.1.18060.16` so any SNMP
//! manager loaded with the Ambari MIB can decode them without further
//! configuration. Sending the PDU is left to an SNMP transport; this crate
//! only decides what goes in it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use ambari_snmp_trap::{AlertInfo, AlertState, DispatchRegistry, Notification, Version};
//! use ambari_snmp_trap::config::PORT_PROPERTY;
//!
//! # fn main() -> ambari_snmp_trap::Result<()> {
//! let properties = HashMap::from([(PORT_PROPERTY.to_string(), "162".to_string())]);
//! let registry = DispatchRegistry::with_ambari(&properties)?;
//! let builder = registry.get("AMBARI_SNMP").expect("registered");
//!
//! let alert = AlertInfo::new()
//!     .definition_id(42)
//!     .definition_name("disk_usage")
//!     .alert_state(AlertState::Critical)
//!     .host_name("node1");
//!
//! let pdu = builder.build_trap(&Notification::alert(alert), Version::V2c);
//! for vb in &pdu.varbinds {
//!     println!("{}", vb);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - `ambari-trap` command-line tool (clap, serde, tracing-subscriber)

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod config;
pub mod error;
pub mod notification;
pub mod oid;
pub mod pdu;
pub mod prelude;
pub mod registry;
pub mod schema;
pub mod value;
pub mod varbind;
pub mod version;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;

// Re-exports for convenience
pub use builder::{AMBARI_SNMP_TARGET_TYPE, AmbariTrapBuilder, NULL_LITERAL, TrapBuilder};
pub use config::DispatchConfig;
pub use error::{Error, Result};
pub use notification::{
    AlertInfo, AlertNotification, AlertState, GenericNotification, Notification, NotificationType,
};
pub use oid::Oid;
pub use pdu::{Pdu, PduType};
pub use registry::DispatchRegistry;
pub use schema::{ALERT_FIELDS, AlertField, FieldSpec};
pub use value::Value;
pub use varbind::VarBind;
pub use version::Version;
