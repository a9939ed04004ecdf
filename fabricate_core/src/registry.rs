use crate::config::FabricateConfig;
use crate::error::FabricateError;
use crate::generator::Generator;
use crate::session::Session;
use crate::shape::Record;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A generator the registry can run without knowing its record type.
pub(crate) trait NestedGenerator: Send + Sync {
    fn record_name(&self) -> &'static str;

    /// Fills a fresh instance of the record into the shared session, resolving
    /// any further nested records through `registry`.
    fn fabricate_nested(
        &self,
        session: &mut Session,
        registry: &Registry,
    ) -> Result<Value, FabricateError>;
}

#[derive(Default)]
struct RegistryState {
    generators: HashMap<&'static str, Arc<dyn NestedGenerator>>,
    config: Option<FabricateConfig>,
}

/// Name-keyed lookup from record type to the generator that produces it.
///
/// Only consulted for record-typed fields nested inside another record.
/// Cloning yields another handle to the same table.
#[derive(Clone, Default)]
pub struct Registry {
    state: Arc<RwLock<RegistryState>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose config applies to generators that have none.
    pub fn with_config(config: FabricateConfig) -> Self {
        let registry = Self::new();
        registry.set_config(config);
        registry
    }

    pub fn set_config(&self, config: FabricateConfig) -> &Self {
        self.write().config = Some(config);
        self
    }

    pub fn config(&self) -> Option<FabricateConfig> {
        self.read().config.clone()
    }

    /// Defines a new generator already registered to this registry. Builder
    /// calls made afterwards reach the registry only through another
    /// [`Generator::register`] or [`Registry::add`].
    pub fn define<T: Record>(&self, template: T) -> Generator<T> {
        Generator::define(template).register(self)
    }

    /// Registers `generator` under its record name, replacing any earlier entry.
    pub fn add<T: Record>(&self, generator: &Generator<T>) {
        let entry: Arc<dyn NestedGenerator> = Arc::new(generator.detached());
        let name = entry.record_name();
        tracing::debug!(record = name, "Registering generator");
        self.write().generators.insert(name, entry);
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<Arc<dyn NestedGenerator>> {
        self.read().generators.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().generators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.read().generators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("generators", &self.names())
            .field("config", &self.config())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Engine {
        cylinders: u8,
        fuel: String,
    }

    crate::describe_record!(Engine {
        cylinders: u8,
        fuel: String,
    });

    #[test]
    fn define_registers_under_record_name() {
        let registry = Registry::new();
        assert!(registry.is_empty());

        let _engines = registry.define(Engine::default());
        assert!(registry.contains("Engine"));
        assert_eq!(registry.names(), vec!["Engine"]);
        assert!(registry.lookup("Engine").is_some());
        assert!(registry.lookup("Wheel").is_none());
    }

    #[test]
    fn registering_again_overwrites_the_entry() {
        let registry = Registry::new();
        let first = Generator::define(Engine::default()).register(&registry);
        let _second = first.clone().field("cylinders", |_| 12).register(&registry);
        assert_eq!(registry.len(), 1);

        let mut session = Session::with_seed(FabricateConfig::default(), 5);
        let entry = registry.lookup("Engine").expect("Engine is registered");
        let value = entry
            .fabricate_nested(&mut session, &registry)
            .expect("Nested fabrication should succeed");
        assert_eq!(value["cylinders"], 12);
    }

    #[test]
    fn clones_share_one_table() {
        let registry = Registry::new();
        let handle = registry.clone();
        handle.add(&Generator::define(Engine::default()));

        assert!(registry.contains("Engine"));
        assert!(!Registry::new().contains("Engine"));
    }

    #[test]
    fn registry_config_is_optional() {
        let registry = Registry::new();
        assert_eq!(registry.config(), None);

        let config = FabricateConfig::default().with_sequence_length(1);
        registry.set_config(config.clone());
        assert_eq!(registry.config(), Some(config.clone()));
        assert_eq!(Registry::with_config(config.clone()).config(), Some(config));
    }
}
