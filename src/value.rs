//! SNMP value types.
//!
//! Only the types a trap builder emits are represented. Wire encoding is
//! left to the transport layer.

use crate::oid::Oid;
use bytes::Bytes;

/// SNMP value carried by a variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Value {
    /// OCTET STRING (arbitrary bytes).
    ///
    /// Every alert field binding uses this type, whatever the native type of
    /// the attribute.
    OctetString(Bytes),

    /// OBJECT IDENTIFIER, used for the trap identity.
    ObjectIdentifier(Oid),
}

impl Value {
    /// Try to get as raw bytes.
    ///
    /// Returns `Some(&[u8])` for [`Value::OctetString`], `None` otherwise.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as a UTF-8 string.
    ///
    /// Returns `None` for non-string values and for octet strings that are
    /// not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use ambari_snmp_trap::Value;
    ///
    /// let v = Value::from("node1");
    /// assert_eq!(v.as_str(), Some("node1"));
    /// assert_eq!(Value::from(ambari_snmp_trap::oid!(1, 3)).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Try to get as an OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// SMI type name, as shown by net-snmp tools.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::OctetString(_) => "STRING",
            Value::ObjectIdentifier(_) => "OID",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::OctetString(data) => write!(f, "{}", String::from_utf8_lossy(data)),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::OctetString(data)
    }
}
