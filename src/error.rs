//! Error types for ambari-snmp-trap.
//!
//! Errors only arise while parsing OIDs and versions or while validating
//! dispatch properties. Building a trap never fails: malformed notifications
//! degrade to an empty PDU instead.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A dispatch property required by a trap builder is absent or blank.
    #[error("missing required dispatch property '{name}'")]
    MissingProperty { name: Box<str> },

    /// A dispatch property is present but its value is unusable.
    #[error("invalid value '{value}' for dispatch property '{name}': {reason}")]
    InvalidProperty {
        name: Box<str>,
        value: Box<str>,
        reason: &'static str,
    },

    /// Dotted OID text with an arc that is not a u32.
    #[error("invalid OID '{input}': arcs must be unsigned 32-bit integers")]
    InvalidOid { input: Box<str> },

    /// Unrecognized SNMP version name.
    #[error("unknown SNMP version '{input}'")]
    UnknownVersion { input: Box<str> },
}

impl Error {
    /// Create a missing property error.
    pub fn missing_property(name: impl Into<Box<str>>) -> Self {
        Self::MissingProperty { name: name.into() }
    }

    /// Create an invalid property error.
    pub fn invalid_property(
        name: impl Into<Box<str>>,
        value: impl Into<Box<str>>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidProperty {
            name: name.into(),
            value: value.into(),
            reason,
        }
    }

    /// Create an invalid OID error for the text that failed to parse.
    pub fn invalid_oid(input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            input: input.into(),
        }
    }

    /// Name of the dispatch property this error refers to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::MissingProperty { name } => Some(&**name),
            Self::InvalidProperty { name, .. } => Some(&**name),
            _ => None,
        }
    }
}
