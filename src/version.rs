//! SNMP version enumeration.
//!
//! The negotiated version decides both the message version tag and the trap
//! PDU type: SNMPv1 traps use a different PDU than SNMPv2c/v3 notifications.

use crate::error::{Error, Result};
use crate::pdu::PduType;

/// SNMP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Version {
    /// SNMPv1 (RFC 1157)
    V1,
    /// SNMPv2c (RFC 1901)
    #[default]
    V2c,
    /// SNMPv3 (RFC 3411-3418)
    V3,
}

impl Version {
    /// Get the BER-encoded version number.
    pub const fn as_i32(self) -> i32 {
        match self {
            Version::V1 => 0,
            Version::V2c => 1,
            Version::V3 => 3,
        }
    }

    /// Message version tag the transport writes on the wire.
    pub const fn target_version(self) -> i32 {
        self.as_i32()
    }

    /// PDU type used for traps sent with this version.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::{PduType, Version};
    ///
    /// assert_eq!(Version::V1.trap_type(), PduType::TrapV1);
    /// assert_eq!(Version::V2c.trap_type(), PduType::TrapV2);
    /// assert_eq!(Version::V3.trap_type(), PduType::TrapV2);
    /// ```
    pub const fn trap_type(self) -> PduType {
        match self {
            Version::V1 => PduType::TrapV1,
            Version::V2c | Version::V3 => PduType::TrapV2,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::V1 => write!(f, "SNMPv1"),
            Version::V2c => write!(f, "SNMPv2c"),
            Version::V3 => write!(f, "SNMPv3"),
        }
    }
}

impl std::str::FromStr for Version {
    type Err = Error;

    /// Accepts the dispatch property spelling (`SNMPv2c`) and the short
    /// forms used by net-snmp tools (`2c`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        // "snmp" must be followed by a single "v"; bare names may drop it
        let short = match lower.strip_prefix("snmp") {
            Some(rest) => rest.strip_prefix('v'),
            None => Some(lower.strip_prefix('v').unwrap_or(&lower)),
        };
        match short {
            Some("1") => Ok(Version::V1),
            Some("2c") => Ok(Version::V2c),
            Some("3") => Ok(Version::V3),
            _ => Err(Error::UnknownVersion { input: s.into() }),
        }
    }
}
