//! CLI utilities for ambari-snmp-trap.
//!
//! This module provides command-line argument parsing, notification input
//! parsing and output formatting for the `ambari-trap` tool.
//!
//! This module is only available with the `cli` feature.

pub mod args;
pub mod input;
pub mod output;
