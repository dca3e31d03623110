//! Registry of trap builders keyed by alert target type.
//!
//! The registry is the composition root of the dispatch side: it is built
//! once, owns every builder, and is passed to whatever selects a builder for
//! an alert target. Builders are stored as `Arc<dyn TrapBuilder>` so a
//! lookup can be handed to another worker without borrowing the registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::builder::{AmbariTrapBuilder, TrapBuilder};
use crate::config::DispatchConfig;
use crate::error::Result;

/// Trap builders indexed by [`TrapBuilder::target_type`].
#[derive(Default, Clone)]
pub struct DispatchRegistry {
    builders: HashMap<&'static str, Arc<dyn TrapBuilder>>,
}

impl DispatchRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding an [`AmbariTrapBuilder`] configured from
    /// dispatch properties.
    ///
    /// Fails if a property the Ambari builder requires is missing or invalid.
    pub fn with_ambari(properties: &HashMap<String, String>) -> Result<Self> {
        let config = DispatchConfig::from_properties(properties)?;
        Ok(Self::with_ambari_config(config))
    }

    /// Create a registry holding an [`AmbariTrapBuilder`] for settings that
    /// were already validated.
    pub fn with_ambari_config(config: DispatchConfig) -> Self {
        let mut registry = Self::new();
        registry.register(AmbariTrapBuilder::new(config));
        registry
    }

    /// Register a builder under its target type.
    ///
    /// Returns the builder previously registered for that type, if any.
    pub fn register<B>(&mut self, builder: B) -> Option<Arc<dyn TrapBuilder>>
    where
        B: TrapBuilder + 'static,
    {
        self.register_arc(Arc::new(builder))
    }

    /// Register an already shared builder under its target type.
    pub fn register_arc(&mut self, builder: Arc<dyn TrapBuilder>) -> Option<Arc<dyn TrapBuilder>> {
        let target_type = builder.target_type();
        let previous = self.builders.insert(target_type, builder);
        if previous.is_some() {
            tracing::warn!(target: "ambari_snmp_trap::registry", { target_type = target_type }, "replacing registered trap builder");
        } else {
            tracing::debug!(target: "ambari_snmp_trap::registry", { target_type = target_type }, "registered trap builder");
        }
        previous
    }

    /// Builder registered for `target_type`.
    pub fn get(&self, target_type: &str) -> Option<Arc<dyn TrapBuilder>> {
        self.builders.get(target_type).cloned()
    }

    /// Check if a builder is registered for `target_type`.
    pub fn contains(&self, target_type: &str) -> bool {
        self.builders.contains_key(target_type)
    }

    /// Remove the builder registered for `target_type`.
    pub fn remove(&mut self, target_type: &str) -> Option<Arc<dyn TrapBuilder>> {
        self.builders.remove(target_type)
    }

    /// Number of registered builders.
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if no builders are registered.
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered target types, in no particular order.
    pub fn target_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builders.keys().copied()
    }
}

impl std::fmt::Debug for DispatchRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut types: Vec<_> = self.target_types().collect();
        types.sort_unstable();
        f.debug_struct("DispatchRegistry")
            .field("target_types", &types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AMBARI_SNMP_TARGET_TYPE;
    use crate::config::PORT_PROPERTY;
    use crate::error::Error;
    use crate::notification::Notification;
    use crate::pdu::Pdu;
    use crate::version::Version;

    struct NullBuilder;

    impl TrapBuilder for NullBuilder {
        fn target_type(&self) -> &'static str {
            "NULL_SNMP"
        }

        fn required_properties(&self) -> &'static [&'static str] {
            &[]
        }

        fn build_trap(&self, _notification: &Notification, version: Version) -> Pdu {
            Pdu::new(version)
        }
    }

    fn port_props() -> HashMap<String, String> {
        HashMap::from([(PORT_PROPERTY.to_string(), "162".to_string())])
    }

    #[test]
    fn test_with_ambari() {
        let registry = DispatchRegistry::with_ambari(&port_props()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(AMBARI_SNMP_TARGET_TYPE));

        let builder = registry.get(AMBARI_SNMP_TARGET_TYPE).unwrap();
        assert_eq!(builder.target_type(), AMBARI_SNMP_TARGET_TYPE);
    }

    #[test]
    fn test_with_ambari_requires_port() {
        let err = DispatchRegistry::with_ambari(&HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { .. }));
    }

    #[test]
    fn test_with_ambari_rejects_zero_port() {
        let props = HashMap::from([(PORT_PROPERTY.to_string(), "0".to_string())]);
        let err = DispatchRegistry::with_ambari(&props).unwrap_err();
        assert!(matches!(err, Error::InvalidProperty { .. }));
    }

    #[test]
    fn test_with_ambari_config_matches_properties_path() {
        let from_props = DispatchRegistry::with_ambari(&port_props()).unwrap();
        let config = DispatchConfig::from_properties(&port_props()).unwrap();
        let from_config = DispatchRegistry::with_ambari_config(config);

        let n = Notification::alert(crate::notification::AlertInfo::new().host_name("node1"));
        let a = from_props.get(AMBARI_SNMP_TARGET_TYPE).unwrap();
        let b = from_config.get(AMBARI_SNMP_TARGET_TYPE).unwrap();
        assert_eq!(a.build_trap(&n, Version::V2c), b.build_trap(&n, Version::V2c));
    }

    #[test]
    fn test_register_replaces_same_type() {
        let mut registry = DispatchRegistry::new();
        assert!(registry.register(NullBuilder).is_none());
        assert!(registry.register(NullBuilder).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_multiple_types() {
        let mut registry = DispatchRegistry::with_ambari(&port_props()).unwrap();
        registry.register(NullBuilder);

        let mut types: Vec<_> = registry.target_types().collect();
        types.sort_unstable();
        assert_eq!(types, vec![AMBARI_SNMP_TARGET_TYPE, "NULL_SNMP"]);
        assert_eq!(
            format!("{:?}", registry),
            "DispatchRegistry { target_types: [\"AMBARI_SNMP\", \"NULL_SNMP\"] }"
        );

        assert!(registry.remove("NULL_SNMP").is_some());
        assert!(registry.get("NULL_SNMP").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = DispatchRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(AMBARI_SNMP_TARGET_TYPE).is_none());
    }
}
