//! Common test fixtures and constants.

use ambari_snmp_trap::{
    AlertInfo, AlertState, AmbariTrapBuilder, DispatchConfig, Notification, Oid, oid,
};

// =============================================================================
// Ambari schema OIDs (1.3.6.1.4.1.18060.16.*)
// =============================================================================

/// apacheAmbariTraps: 1.3.6.1.4.1.18060.16.0
pub fn traps_root() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 18060, 16, 0)
}

/// apacheAmbariAlerts: 1.3.6.1.4.1.18060.16.1
pub fn alerts_root() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1)
}

/// apacheAmbariAlertEntry column `index`.
pub fn entry_column(index: u32) -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 18060, 16, 1, 1, 1, index)
}

/// snmpTrapOID.0: 1.3.6.1.6.3.1.1.4.1.0
pub fn snmp_trap_oid() -> Oid {
    oid!(1, 3, 6, 1, 6, 3, 1, 1, 4, 1, 0)
}

// =============================================================================
// Builders and alerts
// =============================================================================

/// Default trap receiver port.
pub const TRAP_PORT: u16 = 162;

/// Ambari builder targeting the default trap port.
pub fn ambari_builder() -> AmbariTrapBuilder {
    AmbariTrapBuilder::new(DispatchConfig::try_new(TRAP_PORT).unwrap())
}

/// Disk usage alert with service and component left unset.
pub fn disk_usage_alert() -> AlertInfo {
    AlertInfo::new()
        .definition_id(42)
        .definition_name("disk_usage")
        .definition_hash("abc123")
        .alert_name("Disk Usage Alert")
        .alert_text("92% used")
        .alert_state(AlertState::Critical)
        .host_name("node1")
}

/// Alert with every attribute set.
pub fn complete_alert() -> AlertInfo {
    AlertInfo::new()
        .definition_id(1001)
        .definition_name("datanode_process")
        .definition_hash("9f86d081")
        .alert_name("DataNode Process")
        .alert_text("Connection refused")
        .alert_state(AlertState::Critical)
        .host_name("dn3.example.com")
        .service_name("HDFS")
        .component_name("DATANODE")
}

/// Wrap an alert record in a notification.
pub fn alert_notification(info: AlertInfo) -> Notification {
    Notification::alert(info)
}
