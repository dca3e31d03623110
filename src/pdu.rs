//! SNMP Protocol Data Units (PDUs).
//!
//! A [`Pdu`] here is the transport-neutral envelope a trap builder hands to
//! the sending layer: the negotiated version, the PDU type tag and the
//! ordered variable bindings.

use crate::oid::Oid;
use crate::schema;
use crate::value::Value;
use crate::varbind::VarBind;
use crate::version::Version;

/// Trap PDU type tag.
///
/// SNMPv1 has its own trap PDU layout; SNMPv2c and SNMPv3 share the
/// `SNMPv2-Trap` PDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PduType {
    /// `Trap-PDU` (SNMPv1, tag 0xA4)
    TrapV1 = 0xA4,
    /// `SNMPv2-Trap-PDU` (SNMPv2c and SNMPv3, tag 0xA7)
    TrapV2 = 0xA7,
}

impl PduType {
    /// Context-specific tag the transport encodes.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for PduType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrapV1 => write!(f, "TrapV1"),
            Self::TrapV2 => write!(f, "TrapV2"),
        }
    }
}

/// Trap PDU ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdu {
    /// Negotiated SNMP version
    pub version: Version,
    /// PDU type
    pub pdu_type: PduType,
    /// Variable bindings, in insertion order
    pub varbinds: Vec<VarBind>,
}

impl Pdu {
    /// Create an empty PDU typed with the trap type for `version`.
    pub fn new(version: Version) -> Self {
        Self {
            version,
            pdu_type: version.trap_type(),
            varbinds: Vec::new(),
        }
    }

    /// Append a binding.
    pub fn push(&mut self, oid: Oid, value: Value) {
        self.varbinds.push(VarBind::new(oid, value));
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.varbinds.len()
    }

    /// Check if the PDU carries no bindings.
    pub fn is_empty(&self) -> bool {
        self.varbinds.is_empty()
    }

    /// Value bound to `oid`, if present.
    pub fn get(&self, oid: &Oid) -> Option<&Value> {
        self.varbinds
            .iter()
            .find(|vb| &vb.oid == oid)
            .map(|vb| &vb.value)
    }

    /// The trap identity carried in the `snmpTrapOID.0` binding, if any.
    pub fn trap_oid(&self) -> Option<&Oid> {
        self.get(&schema::snmp_trap_oid())
            .and_then(Value::as_oid)
    }
}
