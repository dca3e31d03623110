//! Shared test utilities for ambari-snmp-trap integration tests.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

mod fixtures;

pub use fixtures::*;
