//! Trap bindings.

use crate::oid::Oid;
use crate::schema;
use crate::value::Value;

/// One OID/value pair of a trap, in the order the builder appended it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    pub oid: Oid,
    pub value: Value,
}

impl VarBind {
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// Ambari MIB name of the bound OID, if it belongs to the schema.
    pub fn mib_name(&self) -> Option<&'static str> {
        schema::lookup(&self.oid)
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}
