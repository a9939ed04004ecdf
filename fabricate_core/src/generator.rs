use crate::config::FabricateConfig;
use crate::engine::{Synthesizer, coerce_numeric};
use crate::error::FabricateError;
use crate::registry::{NestedGenerator, Registry};
use crate::session::Session;
use crate::shape::{Record, RecordRef, RecordShape};
use crate::trait_table::{FieldOverride, Overrides, Trait, merge_traits};
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Builds populated instances of a record type for use as test fixtures.
///
/// Fields left at their zero value in the template are filled in declaration
/// order, except that fields with an explicit override are generated last, in
/// the order their overrides were registered. Builder methods consume and
/// return the generator. A registry keeps the copy it was handed by
/// [`register`](Self::register); later builder calls only change this value.
pub struct Generator<T: Record> {
    template: T,
    shape: Arc<RecordShape>,
    field_order: Vec<String>,
    overrides: Overrides,
    traits: HashMap<String, Trait>,
    omitted: HashSet<String>,
    config: Option<FabricateConfig>,
    registry: Option<Registry>,
}

impl<T: Record> Generator<T> {
    /// A generator whose template is `T::default()`.
    pub fn new() -> Self {
        Self::define(T::default())
    }

    /// Starts a generator for the type of `template`. Non-zero fields of the
    /// template are kept as-is in every fabricated instance.
    pub fn define(template: T) -> Self {
        let shape = T::shape();
        let field_order = shape.field_names();
        Self {
            template,
            shape: Arc::new(shape),
            field_order,
            overrides: Overrides::new(),
            traits: HashMap::new(),
            omitted: HashSet::new(),
            config: None,
            registry: None,
        }
    }

    /// Registers (or replaces) the override for `name` and moves that field to
    /// the end of the generation order.
    pub fn field<F, V>(self, name: &str, generator: F) -> Self
    where
        F: Fn(&mut Session) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        self.field_override(name, FieldOverride::new(generator))
    }

    /// Applies the same override to each of `names`, in order.
    pub fn fields<F, V>(mut self, names: &[&str], generator: F) -> Self
    where
        F: Fn(&mut Session) -> V + Send + Sync + 'static,
        V: Serialize,
    {
        let shared = FieldOverride::new(generator);
        for name in names {
            self = self.field_override(name, shared.clone());
        }
        self
    }

    pub fn field_override(mut self, name: &str, generator: FieldOverride) -> Self {
        self.overrides.insert(name.to_string(), generator);
        self.field_order.retain(|field| field != name);
        self.field_order.push(name.to_string());
        self
    }

    /// Forces `names` to their zero value, whatever the template, overrides,
    /// traits or defaults say.
    pub fn zero_fields(mut self, names: &[&str]) -> Self {
        self.omitted.extend(names.iter().map(|name| name.to_string()));
        self
    }

    /// Replaces the template. Its non-zero fields are never overwritten.
    pub fn with(mut self, template: T) -> Self {
        self.template = template;
        self
    }

    /// Binds a config, taking precedence over the registry's.
    pub fn with_config(mut self, config: FabricateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Binds this generator to `registry` and registers a copy of its current
    /// setup under its record name, replacing any generator registered there
    /// before.
    pub fn register(mut self, registry: &Registry) -> Self {
        registry.add(&self);
        self.registry = Some(registry.clone());
        self
    }

    /// Creates an empty trait under `name`, replacing any trait of that name.
    pub fn define_trait(&mut self, name: &str) -> &mut Trait {
        let defined = self.traits.entry(name.to_string()).or_default();
        *defined = Trait::new();
        defined
    }

    pub fn name(&self) -> &'static str {
        T::NAME
    }

    pub fn field_order(&self) -> Vec<&str> {
        self.field_order.iter().map(String::as_str).collect()
    }

    /// The generator's own config, else its registry's, else the built-in default.
    pub fn resolve_config(&self) -> FabricateConfig {
        if let Some(config) = &self.config {
            return config.clone();
        }
        self.registry
            .as_ref()
            .and_then(Registry::config)
            .unwrap_or_default()
    }

    /// Fabricates one instance with the named traits applied in order.
    ///
    /// Fails without producing anything if a trait name is unknown or if an
    /// override produced a value that does not fit its field.
    pub fn fabricate(&self, trait_names: &[&str]) -> Result<T, FabricateError> {
        let session = Session::new(self.resolve_config());
        self.fabricate_with_session(session, trait_names)
    }

    /// Like [`fabricate`](Self::fabricate) but with a fixed random seed.
    pub fn fabricate_seeded(&self, seed: u64, trait_names: &[&str]) -> Result<T, FabricateError> {
        let session = Session::with_seed(self.resolve_config(), seed);
        self.fabricate_with_session(session, trait_names)
    }

    /// Fabricates `count` instances, each in its own session.
    pub fn fabricate_many(
        &self,
        count: usize,
        trait_names: &[&str],
    ) -> Result<Vec<T>, FabricateError> {
        (0..count).map(|_| self.fabricate(trait_names)).collect()
    }

    fn fabricate_with_session(
        &self,
        mut session: Session,
        trait_names: &[&str],
    ) -> Result<T, FabricateError> {
        let overrides = self.apply_traits(trait_names)?;
        let record = self.fill(&overrides, &mut session, self.registry.as_ref())?;
        serde_json::from_value(record).map_err(|source| FabricateError::TypeMismatch {
            record: T::NAME.to_string(),
            source,
        })
    }

    fn apply_traits(&self, trait_names: &[&str]) -> Result<Overrides, FabricateError> {
        let mut applied = Vec::with_capacity(trait_names.len());
        for trait_name in trait_names {
            let found =
                self.traits
                    .get(*trait_name)
                    .ok_or_else(|| FabricateError::UnregisteredTrait {
                        record: T::NAME.to_string(),
                        trait_name: trait_name.to_string(),
                    })?;
            applied.push(found);
        }
        if !applied.is_empty() {
            tracing::debug!(record = T::NAME, traits = ?trait_names, "Applying traits");
        }
        Ok(merge_traits(&self.overrides, applied))
    }

    /// Builds the dynamic form of one instance inside `session`, restoring the
    /// session's previous in-progress record afterwards.
    fn fill(
        &self,
        overrides: &Overrides,
        session: &mut Session,
        registry: Option<&Registry>,
    ) -> Result<Value, FabricateError> {
        let template =
            serde_json::to_value(&self.template).map_err(|source| FabricateError::Serialization {
                record: T::NAME.to_string(),
                source,
            })?;
        if !template.is_object() {
            return Err(FabricateError::NotARecord {
                record: T::NAME.to_string(),
            });
        }

        let blank = RecordRef::of::<T>().zero_value();
        let synthesizer = Synthesizer {
            record: T::NAME,
            overrides,
            omitted: &self.omitted,
            registry,
        };

        let parent = session.replace_record(template);
        let result = self.fill_fields(&synthesizer, &blank, session);
        let record = session.replace_record(parent);
        result.map(|_| record)
    }

    fn fill_fields(
        &self,
        synthesizer: &Synthesizer<'_>,
        blank: &Value,
        session: &mut Session,
    ) -> Result<(), FabricateError> {
        for name in &self.field_order {
            let Some(field) = self.shape.field(name) else {
                tracing::trace!(record = T::NAME, field = %name, "Skipping unknown field");
                continue;
            };
            if self.omitted.contains(name) {
                let zero = blank
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| field.kind.zero_value());
                session.set_field(name, zero);
                continue;
            }
            let preset = session
                .field(name)
                .is_some_and(|current| !field.kind.is_zero(current));
            if preset {
                tracing::trace!(record = T::NAME, field = %name, "Keeping preset value");
                continue;
            }
            if let Some(value) = synthesizer.synthesize(name, &field.kind, session)? {
                session.set_field(name, coerce_numeric(&field.kind, value));
            }
        }
        Ok(())
    }

    /// A copy without its registry binding, as stored inside a registry.
    pub(crate) fn detached(&self) -> Self {
        Self {
            registry: None,
            ..self.clone()
        }
    }

}

impl<T: Record> NestedGenerator for Generator<T> {
    fn record_name(&self) -> &'static str {
        T::NAME
    }

    fn fabricate_nested(
        &self,
        session: &mut Session,
        registry: &Registry,
    ) -> Result<Value, FabricateError> {
        self.fill(&self.overrides, session, Some(registry))
    }
}

impl<T: Record> Clone for Generator<T> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            shape: Arc::clone(&self.shape),
            field_order: self.field_order.clone(),
            overrides: self.overrides.clone(),
            traits: self.traits.clone(),
            omitted: self.omitted.clone(),
            config: self.config.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<T: Record> Default for Generator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record + fmt::Debug> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut traits: Vec<&String> = self.traits.keys().collect();
        traits.sort();
        f.debug_struct("Generator")
            .field("record", &T::NAME)
            .field("template", &self.template)
            .field("field_order", &self.field_order)
            .field("traits", &traits)
            .field("omitted", &self.omitted)
            .field("config", &self.config)
            .field("registered", &self.registry.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Person {
        first_name: String,
        middle_name: String,
        last_name: String,
        full_name: String,
        age: u8,
        is_senior: bool,
        vehicle: Vehicle,
        family_members: Vec<Person>,
    }

    crate::describe_record!(Person {
        first_name: String,
        middle_name: String,
        last_name: String,
        full_name: String,
        age: u8,
        is_senior: bool,
        vehicle: Vehicle,
        family_members: Vec<Person>,
    });

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Vehicle {
        year: u16,
        make: String,
        color: String,
        wheels: u8,
        nickname: Option<String>,
    }

    crate::describe_record!(Vehicle {
        year: u16,
        make: String,
        color: String,
        wheels: u8,
        nickname: Option<String>,
    });

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct AllTypes {
        flag: bool,
        text: String,
        int: i32,
        int8: i8,
        int16: i16,
        int64: i64,
        size: isize,
        uint: u32,
        uint8: u8,
        uint16: u16,
        uint64: u64,
        usize_field: usize,
        float32: f32,
        float64: f64,
        slice: Vec<i32>,
        ptr: Option<String>,
        map: HashMap<String, i32>,
    }

    crate::describe_record!(AllTypes {
        flag: bool,
        text: String,
        int: i32,
        int8: i8,
        int16: i16,
        int64: i64,
        size: isize,
        uint: u32,
        uint8: u8,
        uint16: u16,
        uint64: u64,
        usize_field: usize,
        float32: f32,
        float64: f64,
        slice: Vec<i32>,
        ptr: Option<String>,
        map: HashMap<String, i32>,
    });

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Crate {
        width: i64,
        tag: String,
    }

    crate::describe_record!(Crate {
        width: i64,
        tag: String,
    });

    fn person_fabricator(registry: &Registry) -> Generator<Person> {
        let mut people = Generator::define(Person::default())
            .field("is_senior", |_| false)
            .field("full_name", |session: &mut Session| {
                format!(
                    "{} {}",
                    session.get::<String>("first_name").unwrap_or_default(),
                    session.get::<String>("last_name").unwrap_or_default()
                )
            })
            .zero_fields(&["middle_name"]);

        people
            .define_trait("senior citizen")
            .field("age", |_| 70)
            .field("is_senior", |_| true);
        people.define_trait("motorcyclist").field("age", |_| 21);
        people.register(registry)
    }

    fn vehicle_fabricator(registry: &Registry) -> Generator<Vehicle> {
        let mut vehicles = Generator::define(Vehicle::default()).field("wheels", |_| 4);
        vehicles.define_trait("motorcycle").field("wheels", |_| 2);
        vehicles.register(registry)
    }

    #[test]
    fn type_defaults_are_never_zero() {
        let fabricated = Generator::<AllTypes>::new()
            .fabricate(&[])
            .expect("Fabrication should succeed");
        let empty = AllTypes::default();

        assert_ne!(fabricated.flag, empty.flag);
        assert_ne!(fabricated.text, empty.text);
        assert_ne!(fabricated.int, empty.int);
        assert_ne!(fabricated.int8, empty.int8);
        assert_ne!(fabricated.int16, empty.int16);
        assert_ne!(fabricated.int64, empty.int64);
        assert_ne!(fabricated.size, empty.size);
        assert_ne!(fabricated.uint, empty.uint);
        assert_ne!(fabricated.uint8, empty.uint8);
        assert_ne!(fabricated.uint16, empty.uint16);
        assert_ne!(fabricated.uint64, empty.uint64);
        assert_ne!(fabricated.usize_field, empty.usize_field);
        assert_ne!(fabricated.float32, empty.float32);
        assert_ne!(fabricated.float64, empty.float64);

        assert_eq!(fabricated.slice.len(), 3);
        assert!(fabricated.slice.iter().all(|n| (1..=100).contains(n)));
        assert!(fabricated.ptr.as_ref().is_some_and(|s| s.len() == 8));
        assert!(fabricated.map.len() <= 3 && !fabricated.map.is_empty());
    }

    #[test]
    fn two_calls_draw_independent_values() {
        let crates = Generator::<Crate>::new();
        let first = crates.fabricate(&[]).unwrap();
        let second = crates.fabricate(&[]).unwrap();

        assert_eq!(first.tag.len(), 8);
        assert_eq!(second.tag.len(), 8);
        assert_ne!(first.tag, second.tag);
        assert!((1..=100).contains(&first.width));
        assert!((1..=100).contains(&second.width));
    }

    #[test]
    fn explicit_override_wins_every_call() {
        let crates = Generator::<Crate>::new().field("width", |_| 10);
        for fabricated in crates.fabricate_many(5, &[]).unwrap() {
            assert_eq!(fabricated.width, 10);
            assert_eq!(fabricated.tag.len(), 8);
        }
    }

    #[test]
    fn zero_fields_beat_overrides() {
        let crates = Generator::<Crate>::new()
            .field("width", |_| 10)
            .zero_fields(&["width"]);
        let fabricated = crates.fabricate(&[]).unwrap();
        assert_eq!(fabricated.width, 0);
        assert!(!fabricated.tag.is_empty());
    }

    #[test]
    fn overridden_fields_move_to_the_end_in_registration_order() {
        let people = Generator::<Person>::new()
            .field("first_name", |_| "A")
            .field("age", |_| 1)
            .field("first_name", |_| "B");
        assert_eq!(
            people.field_order(),
            vec![
                "middle_name",
                "last_name",
                "full_name",
                "is_senior",
                "vehicle",
                "family_members",
                "age",
                "first_name",
            ]
        );
    }

    #[test]
    fn fields_applies_one_generator_to_each_name() {
        let people = Generator::<Person>::new().fields(&["first_name", "last_name"], |_| "Same");
        let fabricated = people.fabricate(&[]).unwrap();
        assert_eq!(fabricated.first_name, "Same");
        assert_eq!(fabricated.last_name, "Same");
        assert_eq!(
            people.field_order().iter().rev().take(2).collect::<Vec<_>>(),
            vec![&"last_name", &"first_name"]
        );
    }

    #[test]
    fn overrides_read_siblings_and_registry_fills_nested_records() {
        let registry = Registry::new();
        let people = person_fabricator(&registry);
        let _vehicles = vehicle_fabricator(&registry);

        let person = people
            .clone()
            .with(Person {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                ..Person::default()
            })
            .fabricate(&[])
            .unwrap();

        assert_eq!(person.first_name, "John");
        assert_eq!(person.last_name, "Doe");
        assert_eq!(person.full_name, "John Doe");
        assert_eq!(person.middle_name, "");
        assert_eq!(person.vehicle.wheels, 4);
        assert!(person.vehicle.nickname.is_some());
    }

    #[test]
    fn traits_apply_in_order() {
        let registry = Registry::new();
        let people = person_fabricator(&registry);

        let default_person = people.fabricate(&[]).unwrap();
        let senior = people.fabricate(&["senior citizen"]).unwrap();
        let senior_motorcyclist = people.fabricate(&["motorcyclist", "senior citizen"]).unwrap();
        let motorcyclist_senior = people.fabricate(&["senior citizen", "motorcyclist"]).unwrap();

        assert!(!default_person.is_senior);
        assert!(senior.is_senior);
        assert_eq!(senior.age, 70);
        assert!(senior_motorcyclist.is_senior);
        assert_eq!(senior_motorcyclist.age, 70);
        assert_eq!(motorcyclist_senior.age, 21);
    }

    #[test]
    fn trait_overrides_can_fabricate_with_other_generators() {
        let registry = Registry::new();
        let vehicles = vehicle_fabricator(&registry);
        let mut people = person_fabricator(&registry);
        people.define_trait("biker").field("vehicle", move |_| {
            vehicles.fabricate(&["motorcycle"]).unwrap_or_default()
        });

        let biker = people.fabricate(&["biker"]).unwrap();
        assert_eq!(biker.vehicle.wheels, 2);
    }

    #[test]
    fn self_referential_records_stop_at_max_depth() {
        let registry = Registry::new();
        let people = person_fabricator(&registry);

        // The first element uses up the single nested Person allowed per call;
        // every later entry is refused and dropped from its sequence.
        let person = people.fabricate(&[]).unwrap();
        assert_eq!(person.family_members.len(), 1);
        let member = &person.family_members[0];
        assert!(!member.first_name.is_empty());
        assert_eq!(member.full_name, format!("{} {}", member.first_name, member.last_name));
        assert!(member.family_members.is_empty());
    }

    #[test]
    fn deeper_ceiling_populates_more_levels() {
        let registry = Registry::new();
        let people = person_fabricator(&registry).with_config(
            FabricateConfig::default()
                .with_max_nested_depth(3)
                .with_sequence_length(2),
        );

        let person = people.fabricate(&[]).unwrap();
        assert_eq!(person.family_members.len(), 1);
        let child = &person.family_members[0];
        assert_eq!(child.family_members.len(), 1);
        assert!(!child.family_members[0].first_name.is_empty());
        assert!(child.family_members[0].family_members.is_empty());
    }

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Team {
        name: String,
        members: Vec<Player>,
    }

    crate::describe_record!(Team {
        name: String,
        members: Vec<Player>,
    });

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct Player {
        name: String,
        team: Option<Box<Team>>,
    }

    crate::describe_record!(Player {
        name: String,
        team: Option<Box<Team>>,
    });

    #[test]
    fn nesting_ceiling_is_counted_per_record_type() {
        let registry = Registry::new();
        let teams = Generator::<Team>::new().register(&registry);
        let _players = Generator::<Player>::new().register(&registry);

        let team = teams.fabricate(&[]).unwrap();
        assert!(!team.name.is_empty());
        assert_eq!(team.members.len(), 1);

        // Entering Player does not use up Team's allowance.
        let player = &team.members[0];
        let inner = player.team.as_ref().expect("References are populated");
        assert!(!inner.name.is_empty());
        assert!(inner.members.is_empty(), "Player's allowance is spent");
    }

    #[test]
    fn unregistered_trait_aborts_the_call() {
        let registry = Registry::new();
        let people = person_fabricator(&registry);

        match people.fabricate(&["senior citizen", "unregistered factory"]) {
            Err(FabricateError::UnregisteredTrait { record, trait_name }) => {
                assert_eq!(record, "Person");
                assert_eq!(trait_name, "unregistered factory");
            }
            other => panic!("Expected UnregisteredTrait, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_override_type_is_an_error() {
        let crates = Generator::<Crate>::new().field("width", |_| "ten");
        match crates.fabricate(&[]) {
            Err(FabricateError::TypeMismatch { record, .. }) => assert_eq!(record, "Crate"),
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn integral_float_override_is_coerced() {
        let crates = Generator::<Crate>::new().field("width", |_| 12.0);
        assert_eq!(crates.fabricate(&[]).unwrap().width, 12);
    }

    #[test]
    fn config_resolution_order() {
        let all_types = Generator::<AllTypes>::new();
        let fabricated = all_types.fabricate(&[]).unwrap();
        assert_eq!(fabricated.slice.len(), 3);
        assert_eq!(fabricated.text.len(), 8);
        assert!(fabricated.ptr.is_some());

        let registry = Registry::new();
        let custom = all_types
            .clone()
            .with_config(FabricateConfig {
                default_generators_enabled: true,
                default_mapping_size: 4,
                default_sequence_length: 4,
                default_text_length: 9,
                populate_references: false,
                max_nested_depth: 1,
                seed: None,
            })
            .register(&registry);
        let fabricated = custom.fabricate(&[]).unwrap();
        assert_eq!(fabricated.map.len(), 4);
        assert_eq!(fabricated.slice.len(), 4);
        assert_eq!(fabricated.text.len(), 9);
        assert!(fabricated.ptr.is_none());

        registry.set_config(FabricateConfig::default().with_sequence_length(1));
        let from_registry = all_types.register(&registry);
        assert_eq!(from_registry.fabricate(&[]).unwrap().slice.len(), 1);
    }

    #[test]
    fn disabled_defaults_leave_template_values() {
        let crates = Generator::define(Crate {
            width: 0,
            tag: "preset".to_string(),
        })
        .with_config(FabricateConfig::default().with_default_generators(false));
        let fabricated = crates.fabricate(&[]).unwrap();
        assert_eq!(fabricated, Crate {
            width: 0,
            tag: "preset".to_string(),
        });
    }

    #[test]
    fn preset_template_fields_survive_overrides_and_traits() {
        let mut crates = Generator::define(Crate {
            width: 55,
            tag: String::new(),
        })
        .field("width", |_| 10);
        crates.define_trait("wide").field("width", |_| 1000);

        let fabricated = crates.fabricate(&["wide"]).unwrap();
        assert_eq!(fabricated.width, 55);
        assert_eq!(fabricated.tag.len(), 8);
    }

    #[test]
    fn seeded_fabrication_is_reproducible() {
        let all_types = Generator::<AllTypes>::new();
        let a = all_types.fabricate_seeded(1234, &[]).unwrap();
        let b = all_types.fabricate_seeded(1234, &[]).unwrap();
        assert_eq!(a, b);

        let seeded = all_types.with_config(FabricateConfig::default().with_seed(1234));
        assert_eq!(seeded.fabricate(&[]).unwrap(), a);
    }

    #[test]
    fn nested_generators_use_the_callers_config() {
        let registry = Registry::new();
        let _vehicles = vehicle_fabricator(&registry);
        let people = Generator::<Person>::new()
            .with_config(FabricateConfig::default().with_text_length(3))
            .register(&registry);

        let person = people.fabricate(&[]).unwrap();
        assert_eq!(person.vehicle.make.len(), 3);
    }

    #[test]
    fn unregistered_nested_record_stays_zero() {
        let people = Generator::<Person>::new();
        let person = people.fabricate(&[]).unwrap();
        assert_eq!(person.vehicle, Vehicle::default());
        assert!(person.family_members.is_empty());
    }

    #[test]
    fn registry_keeps_the_setup_it_was_given() {
        let registry = Registry::new();
        let vehicles = Generator::<Vehicle>::new().register(&registry);
        let people = Generator::<Person>::new().register(&registry);

        let red = vehicles.clone().field("color", |_| "Red");
        let _variant = vehicles.clone().with(Vehicle {
            make: "Variant".to_string(),
            ..Vehicle::default()
        });
        let vehicle = people.fabricate(&[]).unwrap().vehicle;
        assert_ne!(vehicle.color, "Red");
        assert_ne!(vehicle.make, "Variant");

        let _red = red.register(&registry);
        assert_eq!(people.fabricate(&[]).unwrap().vehicle.color, "Red");
    }

    #[test]
    fn omitted_fields_are_zero_even_when_preset() {
        let crates = Generator::define(Crate {
            width: 55,
            tag: "preset".to_string(),
        })
        .field("width", |_| 10)
        .zero_fields(&["width", "tag"]);

        let fabricated = crates.fabricate(&[]).unwrap();
        assert_eq!(fabricated, Crate::default());
    }

    #[test]
    fn omitted_unsupported_field_takes_the_type_default() {
        #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
        struct Badge {
            initial: char,
            label: String,
        }
        crate::describe_record!(Badge {
            initial: char,
            label: String,
        });

        let badges = Generator::define(Badge {
            initial: 'x',
            label: String::new(),
        })
        .zero_fields(&["initial"]);
        let badge = badges.fabricate(&[]).unwrap();
        assert_eq!(badge.initial, char::default());
        assert_eq!(badge.label.len(), 8);
    }
}
