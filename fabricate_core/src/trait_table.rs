use crate::session::Session;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type OverrideFn = dyn Fn(&mut Session) -> Result<Value, serde_json::Error> + Send + Sync;

/// A user-supplied generator for one field.
///
/// The returned value is not checked against the field's type; a mismatch
/// surfaces when the finished record is converted back to its concrete type.
#[derive(Clone)]
pub struct FieldOverride(Arc<OverrideFn>);

impl FieldOverride {
    pub fn new<F, V>(generator: F) -> Self
    where
        F: Fn(&mut Session) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        Self(Arc::new(move |session| serde_json::to_value(generator(session))))
    }

    pub fn generate(&self, session: &mut Session) -> Result<Value, serde_json::Error> {
        (self.0)(session)
    }
}

impl fmt::Debug for FieldOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldOverride(..)")
    }
}

pub type Overrides = HashMap<String, FieldOverride>;

/// A named, reusable bundle of field overrides applied at fabrication time.
#[derive(Clone, Debug, Default)]
pub struct Trait {
    overrides: Overrides,
}

impl Trait {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the override for `name` within this trait.
    pub fn field<F, V>(&mut self, name: &str, generator: F) -> &mut Self
    where
        F: Fn(&mut Session) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        self.overrides
            .insert(name.to_string(), FieldOverride::new(generator));
        self
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }
}

/// Applies `traits` on top of `base`, in order; later traits win per field.
pub fn merge_traits<'a>(base: &Overrides, traits: impl IntoIterator<Item = &'a Trait>) -> Overrides {
    let mut merged = base.clone();
    for applied in traits {
        for (name, generator) in &applied.overrides {
            merged.insert(name.clone(), generator.clone());
        }
    }
    merged
}
