use crate::defaults::default_generator;
use crate::error::FabricateError;
use crate::registry::Registry;
use crate::session::Session;
use crate::shape::{FieldKind, RecordRef};
use crate::trait_table::Overrides;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Decides the value of each field of one record.
///
/// Resolution order for a field, first match wins: omitted, explicit override,
/// nested record, sequence, optional reference, mapping, primitive default.
/// `Ok(None)` means "not present": the caller leaves the field at its current value.
pub(crate) struct Synthesizer<'a> {
    pub record: &'static str,
    pub overrides: &'a Overrides,
    pub omitted: &'a HashSet<String>,
    pub registry: Option<&'a Registry>,
}

impl Synthesizer<'_> {
    /// Resolves one field. Container elements are resolved as anonymous fields
    /// (empty name), which never match an omission or override.
    pub fn synthesize(
        &self,
        field: &str,
        kind: &FieldKind,
        session: &mut Session,
    ) -> Result<Option<Value>, FabricateError> {
        if !field.is_empty() {
            if self.omitted.contains(field) {
                tracing::trace!(record = self.record, field, "Field omitted");
                return Ok(None);
            }
            if let Some(generator) = self.overrides.get(field) {
                tracing::trace!(record = self.record, field, "Applying field override");
                let value = generator.generate(session).map_err(|source| {
                    FabricateError::Serialization {
                        record: self.record.to_string(),
                        source,
                    }
                })?;
                return Ok(Some(value));
            }
        }

        match kind {
            FieldKind::Record(record) => self.nested_record(record, session),
            FieldKind::Sequence(element) => {
                let length = session.config().default_sequence_length;
                let mut items = Vec::with_capacity(length);
                for _ in 0..length {
                    if let Some(item) = self.synthesize("", element, session)? {
                        items.push(item);
                    }
                }
                Ok(Some(Value::Array(items)))
            }
            FieldKind::OwningRef(inner) => {
                if !session.config().populate_references {
                    return Ok(None);
                }
                match self.synthesize("", inner, session)? {
                    Some(value) => Ok(Some(value)),
                    None => Ok(Some(inner.zero_value())),
                }
            }
            FieldKind::Mapping(key_kind, value_kind) => {
                let size = session.config().default_mapping_size;
                let mut entries = Map::new();
                for _ in 0..size {
                    let key = self.synthesize("", key_kind, session)?;
                    let value = self.synthesize("", value_kind, session)?;
                    if let (Some(key), Some(value)) = (key.as_ref().and_then(map_key), value) {
                        // Colliding keys overwrite; the mapping just ends up smaller.
                        entries.insert(key, value);
                    }
                }
                Ok(Some(Value::Object(entries)))
            }
            primitive => {
                if !session.config().default_generators_enabled {
                    return Ok(None);
                }
                Ok(default_generator(primitive).map(|generate| generate(session)))
            }
        }
    }

    fn nested_record(
        &self,
        record: &RecordRef,
        session: &mut Session,
    ) -> Result<Option<Value>, FabricateError> {
        let Some(registry) = self.registry else {
            return Ok(None);
        };
        let Some(generator) = registry.lookup(record.name()) else {
            tracing::trace!(record = record.name(), "No generator registered");
            return Ok(None);
        };
        if !session.enter_record(record.name()) {
            tracing::debug!(
                record = record.name(),
                max_depth = session.config().max_nested_depth,
                "Nested record ceiling reached"
            );
            return Ok(None);
        }

        tracing::debug!(
            parent = self.record,
            record = record.name(),
            "Fabricating nested record"
        );
        generator.fabricate_nested(session, registry).map(Some)
    }
}

/// Map keys must be strings in the dynamic form; numbers and booleans are
/// rendered and parsed back by serde when the record is rebuilt.
fn map_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Adjusts numeric values to the field's family before assignment.
pub(crate) fn coerce_numeric(kind: &FieldKind, value: Value) -> Value {
    match (kind, value) {
        (FieldKind::Integer(width), Value::Number(n)) if n.is_f64() => {
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => {
                    if width.is_signed() || f < 0.0 {
                        Value::from(f as i64)
                    } else {
                        Value::from(f as u64)
                    }
                }
                _ => Value::Number(n),
            }
        }
        (FieldKind::Float(_), Value::Number(n)) if !n.is_f64() => match n.as_f64() {
            Some(f) => Value::from(f),
            None => Value::Number(n),
        },
        (FieldKind::OwningRef(inner), value) => coerce_numeric(inner, value),
        (_, value) => value,
    }
}
