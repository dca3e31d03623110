//! Apache Ambari OID schema.
//!
//! All Ambari traps live under the vendor-registered base OID
//! `1.3.6.1.4.1.18060.16`:
//!
//! ```text
//! 1.3.6.1.4.1.18060.16           apacheAmbari
//!   .0                           apacheAmbariTraps
//!   .1                           apacheAmbariAlerts
//!   .1.1                         apacheAmbariAlertTable
//!   .1.1.1                       apacheAmbariAlertEntry
//!   .1.1.1.1 .. .1.1.1.9         alert entry columns
//! ```
//!
//! Manager-side MIB definitions depend on these exact numbers. Columns are
//! never renumbered or reordered; new columns get the next free index.

use crate::oid::Oid;

/// Base OID assigned to Apache Ambari.
pub const BASE_OID: &str = "1.3.6.1.4.1.18060.16";
/// Trap root (`apacheAmbariTraps`), bound as the trap identity.
pub const TRAPS_OID: &str = "1.3.6.1.4.1.18060.16.0";
/// Alerts root (`apacheAmbariAlerts`).
pub const ALERTS_OID: &str = "1.3.6.1.4.1.18060.16.1";
/// Alert table (`apacheAmbariAlertTable`).
pub const ALERT_TABLE_OID: &str = "1.3.6.1.4.1.18060.16.1.1";
/// Alert entry (`apacheAmbariAlertEntry`).
pub const ALERT_ENTRY_OID: &str = "1.3.6.1.4.1.18060.16.1.1.1";

/// Arcs of [`BASE_OID`].
pub const BASE_ARCS: &[u32] = &[1, 3, 6, 1, 4, 1, 18060, 16];
/// Arcs of [`TRAPS_OID`].
pub const TRAPS_ARCS: &[u32] = &[1, 3, 6, 1, 4, 1, 18060, 16, 0];
/// Arcs of [`ALERTS_OID`].
pub const ALERTS_ARCS: &[u32] = &[1, 3, 6, 1, 4, 1, 18060, 16, 1];
/// Arcs of [`ALERT_TABLE_OID`].
pub const ALERT_TABLE_ARCS: &[u32] = &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1];
/// Arcs of [`ALERT_ENTRY_OID`].
pub const ALERT_ENTRY_ARCS: &[u32] = &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1];

/// snmpTrapOID.0 arcs (SNMPv2-MIB).
const SNMP_TRAP_OID_ARCS: &[u32] = &[1, 3, 6, 1, 6, 3, 1, 1, 4, 1, 0];

/// snmpTrapOID.0 - the well-known binding that names a notification.
pub fn snmp_trap_oid() -> Oid {
    Oid::from_slice(SNMP_TRAP_OID_ARCS)
}

/// `apacheAmbariTraps` as an [`Oid`].
pub fn traps_root() -> Oid {
    Oid::from_slice(TRAPS_ARCS)
}

/// `apacheAmbariAlerts` as an [`Oid`].
pub fn alerts_root() -> Oid {
    Oid::from_slice(ALERTS_ARCS)
}

/// `apacheAmbariAlertEntry` as an [`Oid`].
pub fn alert_entry() -> Oid {
    Oid::from_slice(ALERT_ENTRY_ARCS)
}

/// Column of the Ambari alert entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertField {
    DefinitionId,
    DefinitionName,
    DefinitionHash,
    AlertName,
    AlertText,
    AlertState,
    HostName,
    ServiceName,
    ComponentName,
}

impl AlertField {
    /// Table entry describing this column.
    pub fn spec(self) -> &'static FieldSpec {
        // ALERT_FIELDS is ordered by column index, and discriminants follow it
        &ALERT_FIELDS[self as usize]
    }

    /// 1-based column index under the alert entry.
    pub fn index(self) -> u32 {
        self.spec().index()
    }

    /// Full OID of this column.
    pub fn oid(self) -> Oid {
        Oid::from_slice(self.spec().arcs)
    }
}

impl std::fmt::Display for AlertField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// One row of the alert column table.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column this row describes.
    pub field: AlertField,
    /// MIB object name.
    pub name: &'static str,
    /// Full OID arcs.
    pub arcs: &'static [u32],
}

impl FieldSpec {
    /// 1-based column index (the last arc).
    pub fn index(&self) -> u32 {
        self.arcs[self.arcs.len() - 1]
    }

    /// Full OID.
    pub fn oid(&self) -> Oid {
        Oid::from_slice(self.arcs)
    }
}

/// Alert entry columns in wire order.
pub static ALERT_FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        field: AlertField::DefinitionId,
        name: "alertDefinitionId",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 1],
    },
    FieldSpec {
        field: AlertField::DefinitionName,
        name: "alertDefinitionName",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 2],
    },
    FieldSpec {
        field: AlertField::DefinitionHash,
        name: "alertDefinitionHash",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 3],
    },
    FieldSpec {
        field: AlertField::AlertName,
        name: "alertName",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 4],
    },
    FieldSpec {
        field: AlertField::AlertText,
        name: "alertText",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 5],
    },
    FieldSpec {
        field: AlertField::AlertState,
        name: "alertState",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 6],
    },
    FieldSpec {
        field: AlertField::HostName,
        name: "alertHost",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 7],
    },
    FieldSpec {
        field: AlertField::ServiceName,
        name: "alertService",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 8],
    },
    FieldSpec {
        field: AlertField::ComponentName,
        name: "alertComponent",
        arcs: &[1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, 9],
    },
];

/// Named nodes above the columns.
static NAMED_NODES: &[(&[u32], &str)] = &[
    (BASE_ARCS, "apacheAmbari"),
    (TRAPS_ARCS, "apacheAmbariTraps"),
    (ALERTS_ARCS, "apacheAmbariAlerts"),
    (ALERT_TABLE_ARCS, "apacheAmbariAlertTable"),
    (ALERT_ENTRY_ARCS, "apacheAmbariAlertEntry"),
    (SNMP_TRAP_OID_ARCS, "snmpTrapOID.0"),
];

/// Look up the MIB name of a schema OID.
///
/// Returns `None` if the OID is not part of the Ambari schema.
pub fn lookup(oid: &Oid) -> Option<&'static str> {
    let arcs = oid.arcs();
    ALERT_FIELDS
        .iter()
        .find(|spec| spec.arcs == arcs)
        .map(|spec| spec.name)
        .or_else(|| {
            NAMED_NODES
                .iter()
                .find(|(pattern, _)| *pattern == arcs)
                .map(|(_, name)| *name)
        })
}
