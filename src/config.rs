//! Dispatch properties required to construct a trap builder.
//!
//! Alert targets carry their settings as a flat string map. A builder
//! declares the names it cannot work without; construction validates them
//! once, so a builder that exists is always ready to build traps.

use std::collections::HashMap;
use std::num::NonZeroU16;

use crate::error::{Error, Result};
use crate::version::Version;

/// Destination port of the SNMP trap receiver.
pub const PORT_PROPERTY: &str = "ambari.dispatch.snmp.port";

/// SNMP version to send with (`SNMPv1`, `SNMPv2c` or `SNMPv3`).
pub const VERSION_PROPERTY: &str = "ambari.dispatch.snmp.version";

const PORT_RANGE: &str = "expected a port number between 1 and 65535";

/// Check that every name in `required` is present and non-blank.
///
/// Reports the first missing name in declaration order.
pub fn check_required(required: &[&str], properties: &HashMap<String, String>) -> Result<()> {
    for &name in required {
        match properties.get(name) {
            Some(value) if !value.trim().is_empty() => {}
            _ => {
                tracing::debug!(target: "ambari_snmp_trap::config", { property = name }, "required dispatch property missing");
                return Err(Error::missing_property(name));
            }
        }
    }
    Ok(())
}

/// Validated settings of an Ambari SNMP alert target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Destination port of the trap receiver. Port 0 cannot be addressed.
    pub port: NonZeroU16,
    /// Version traps are built for.
    pub version: Version,
}

impl DispatchConfig {
    /// Create a config for a known port, using the default version.
    pub fn new(port: NonZeroU16) -> Self {
        Self {
            port,
            version: Version::default(),
        }
    }

    /// Create a config from a plain port number.
    ///
    /// Port 0 is rejected with the same [`Error::InvalidProperty`] that
    /// [`from_properties`](Self::from_properties) reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::DispatchConfig;
    ///
    /// assert_eq!(DispatchConfig::try_new(162).unwrap().port.get(), 162);
    /// assert!(DispatchConfig::try_new(0).is_err());
    /// ```
    pub fn try_new(port: u16) -> Result<Self> {
        NonZeroU16::new(port)
            .map(Self::new)
            .ok_or_else(|| Error::invalid_property(PORT_PROPERTY, port.to_string(), PORT_RANGE))
    }

    /// Set the SNMP version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Build from dispatch properties.
    ///
    /// [`PORT_PROPERTY`] is required and must be a non-zero port number.
    /// [`VERSION_PROPERTY`] is optional and defaults to SNMPv2c.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use ambari_snmp_trap::config::{DispatchConfig, PORT_PROPERTY};
    ///
    /// let mut props = HashMap::new();
    /// props.insert(PORT_PROPERTY.to_string(), "162".to_string());
    /// let config = DispatchConfig::from_properties(&props).unwrap();
    /// assert_eq!(config.port.get(), 162);
    ///
    /// assert!(DispatchConfig::from_properties(&HashMap::new()).is_err());
    /// ```
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        check_required(&[PORT_PROPERTY], properties)?;

        let raw_port = properties
            .get(PORT_PROPERTY)
            .map(|s| s.trim())
            .unwrap_or_default();
        let port = raw_port
            .parse::<NonZeroU16>()
            .map_err(|_| Error::invalid_property(PORT_PROPERTY, raw_port, PORT_RANGE))?;

        let version = match properties.get(VERSION_PROPERTY) {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<Version>().map_err(|_| {
                Error::invalid_property(
                    VERSION_PROPERTY,
                    raw.as_str(),
                    "expected SNMPv1, SNMPv2c or SNMPv3",
                )
            })?,
            _ => Version::default(),
        };

        tracing::debug!(target: "ambari_snmp_trap::config", { port = port.get(), version = %version }, "dispatch properties validated");
        Ok(Self { port, version })
    }
}
