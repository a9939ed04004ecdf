use crate::config::FabricateConfig;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Per-call state for one `fabricate` invocation.
///
/// Override functions receive the session to read sibling fields that were
/// assigned earlier in the generation order and to draw randomness. A session
/// is created fresh for every top-level call and dropped when it returns.
#[derive(Debug)]
pub struct Session {
    record: Value,
    config: FabricateConfig,
    rng: ChaCha8Rng,
    nesting: HashMap<&'static str, usize>,
}

impl Session {
    /// Opens a session, seeding from `config.seed` when set.
    pub fn new(config: FabricateConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: FabricateConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: FabricateConfig, rng: ChaCha8Rng) -> Self {
        Self {
            record: Value::Object(Map::new()),
            config,
            rng,
            nesting: HashMap::new(),
        }
    }

    /// The record currently under construction.
    pub fn record(&self) -> &Value {
        &self.record
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.record.get(name)
    }

    /// Reads a sibling field as a concrete type, `None` if absent or of another type.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.field(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn config(&self) -> &FabricateConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub(crate) fn set_field(&mut self, name: &str, value: Value) {
        if let Value::Object(fields) = &mut self.record {
            fields.insert(name.to_string(), value);
        }
    }

    /// Swaps the in-progress record, returning the previous one. Used when
    /// descending into a nested record and again when coming back out.
    pub(crate) fn replace_record(&mut self, record: Value) -> Value {
        std::mem::replace(&mut self.record, record)
    }

    /// Counts one more entry into a nested record of type `name` during this
    /// call. Returns false once the count reaches the nesting ceiling; the
    /// count never goes back down.
    pub(crate) fn enter_record(&mut self, name: &'static str) -> bool {
        let entered = self.nesting.entry(name).or_insert(0);
        *entered += 1;
        *entered < self.config.max_nested_depth
    }

    #[cfg(test)]
    fn times_entered(&self, name: &str) -> usize {
        self.nesting.get(name).copied().unwrap_or(0)
    }
}
