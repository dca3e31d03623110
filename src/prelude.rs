//! Prelude module for convenient imports.
//!
//! ```rust
//! use ambari_snmp_trap::prelude::*;
//! ```
//!
//! This imports:
//! - Core types: [`Oid`], [`Value`], [`VarBind`], [`Pdu`], [`Version`]
//! - Alert model: [`AlertInfo`], [`AlertState`], [`Notification`]
//! - Builders: [`TrapBuilder`], [`AmbariTrapBuilder`], [`DispatchRegistry`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`oid!`] macro

pub use crate::builder::{AmbariTrapBuilder, TrapBuilder};
pub use crate::config::DispatchConfig;
pub use crate::error::{Error, Result};
pub use crate::notification::{AlertInfo, AlertState, Notification};
pub use crate::oid::Oid;
pub use crate::pdu::{Pdu, PduType};
pub use crate::registry::DispatchRegistry;
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::version::Version;

#[doc(no_inline)]
pub use crate::oid;
