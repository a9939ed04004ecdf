use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// Width of an integer field. Only used for naming and coercion; every integer
/// default fits all widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl IntegerWidth {
    pub fn name(&self) -> &'static str {
        match self {
            IntegerWidth::I8 => "i8",
            IntegerWidth::I16 => "i16",
            IntegerWidth::I32 => "i32",
            IntegerWidth::I64 => "i64",
            IntegerWidth::Isize => "isize",
            IntegerWidth::U8 => "u8",
            IntegerWidth::U16 => "u16",
            IntegerWidth::U32 => "u32",
            IntegerWidth::U64 => "u64",
            IntegerWidth::Usize => "usize",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntegerWidth::I8
                | IntegerWidth::I16
                | IntegerWidth::I32
                | IntegerWidth::I64
                | IntegerWidth::Isize
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    pub fn name(&self) -> &'static str {
        match self {
            FloatWidth::F32 => "f32",
            FloatWidth::F64 => "f64",
        }
    }
}

/// A lazy handle to a record type nested inside another record.
///
/// Holds function pointers rather than the shape itself so self-referential
/// record types can describe themselves without recursing forever.
#[derive(Clone, Copy)]
pub struct RecordRef {
    name: &'static str,
    shape: fn() -> RecordShape,
    zero: fn() -> Value,
}

impl RecordRef {
    pub fn of<R: Record>() -> Self {
        Self {
            name: R::NAME,
            shape: R::shape,
            zero: zero_value_of::<R>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> RecordShape {
        (self.shape)()
    }

    pub fn zero_value(&self) -> Value {
        (self.zero)()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&self.name).finish()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

fn zero_value_of<R: Record>() -> Value {
    serde_json::to_value(R::default()).unwrap_or(Value::Null)
}

/// Classification of a declared field, built once per record type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Boolean,
    Integer(IntegerWidth),
    Float(FloatWidth),
    Text,
    Sequence(Box<FieldKind>),
    OwningRef(Box<FieldKind>),
    Mapping(Box<FieldKind>, Box<FieldKind>),
    Record(RecordRef),
    Unsupported(&'static str),
}

impl FieldKind {
    /// Name of the kind as used for default-generator lookup.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "bool",
            FieldKind::Integer(width) => width.name(),
            FieldKind::Float(width) => width.name(),
            FieldKind::Text => "string",
            FieldKind::Sequence(_) => "sequence",
            FieldKind::OwningRef(_) => "reference",
            FieldKind::Mapping(_, _) => "mapping",
            FieldKind::Record(record) => record.name(),
            FieldKind::Unsupported(name) => name,
        }
    }

    /// The dynamic form of this kind's zero value.
    pub fn zero_value(&self) -> Value {
        match self {
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::Integer(_) => Value::from(0),
            FieldKind::Float(_) => Value::from(0.0),
            FieldKind::Text => Value::String(String::new()),
            FieldKind::Sequence(_) => Value::Array(Vec::new()),
            FieldKind::Mapping(_, _) => Value::Object(serde_json::Map::new()),
            FieldKind::OwningRef(_) => Value::Null,
            FieldKind::Record(record) => record.zero_value(),
            FieldKind::Unsupported(_) => Value::Null,
        }
    }

    /// Whether `value` is the zero value for this kind.
    ///
    /// Sequences and mappings count as zero when empty, so an explicitly empty
    /// collection in a template cannot be told apart from an unset one.
    pub fn is_zero(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }
        match self {
            FieldKind::OwningRef(_) => false,
            FieldKind::Record(record) => {
                if *value == record.zero_value() {
                    return true;
                }
                match value {
                    Value::Object(fields) => record.shape().fields().iter().all(|field| {
                        fields
                            .get(field.name)
                            .is_none_or(|inner| field.kind.is_zero(inner))
                    }),
                    other => is_zero_json(other),
                }
            }
            _ => is_zero_json(value),
        }
    }
}

/// Structural zero test for values whose kind carries no extra meaning.
pub fn is_zero_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.values().all(is_zero_json),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldShape {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The declared fields of a record type, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
    name: &'static str,
    fields: Vec<FieldShape>,
}

impl RecordShape {
    pub fn new(name: &'static str, fields: Vec<FieldShape>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldShape] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldShape> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.name.to_string()).collect()
    }
}

/// A type that can report which `FieldKind` it has when used as a field.
pub trait Describe {
    fn kind() -> FieldKind;
}

/// A record type that generators can fabricate.
///
/// Field names in the shape must match the serialized field names, so records
/// should not rename fields with serde attributes. Use [`describe_record!`]
/// rather than implementing this by hand.
///
/// [`describe_record!`]: crate::describe_record
pub trait Record:
    Describe + Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    const NAME: &'static str;

    fn shape() -> RecordShape;
}

/// Implements [`Describe`] and [`Record`] for a struct by listing its fields.
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Debug, Clone, Default)]
/// struct Vehicle {
///     year: u16,
///     make: String,
///     nickname: Option<String>,
/// }
///
/// describe_record!(Vehicle {
///     year: u16,
///     make: String,
///     nickname: Option<String>,
/// });
/// ```
#[macro_export]
macro_rules! describe_record {
    ($record:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        impl $crate::shape::Describe for $record {
            fn kind() -> $crate::shape::FieldKind {
                $crate::shape::FieldKind::Record($crate::shape::RecordRef::of::<$record>())
            }
        }

        impl $crate::shape::Record for $record {
            const NAME: &'static str = stringify!($record);

            fn shape() -> $crate::shape::RecordShape {
                $crate::shape::RecordShape::new(
                    stringify!($record),
                    vec![
                        $($crate::shape::FieldShape::new(
                            stringify!($field),
                            <$ty as $crate::shape::Describe>::kind(),
                        ),)*
                    ],
                )
            }
        }
    };
}

impl Describe for bool {
    fn kind() -> FieldKind {
        FieldKind::Boolean
    }
}

macro_rules! describe_integers {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(impl Describe for $ty {
            fn kind() -> FieldKind {
                FieldKind::Integer(IntegerWidth::$width)
            }
        })*
    };
}

describe_integers!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
);

impl Describe for f32 {
    fn kind() -> FieldKind {
        FieldKind::Float(FloatWidth::F32)
    }
}

impl Describe for f64 {
    fn kind() -> FieldKind {
        FieldKind::Float(FloatWidth::F64)
    }
}

impl Describe for String {
    fn kind() -> FieldKind {
        FieldKind::Text
    }
}

impl Describe for char {
    fn kind() -> FieldKind {
        FieldKind::Unsupported("char")
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }
}

impl<T: Describe> Describe for HashSet<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn kind() -> FieldKind {
        FieldKind::Sequence(Box::new(T::kind()))
    }
}

impl<T: Describe> Describe for Option<T> {
    fn kind() -> FieldKind {
        FieldKind::OwningRef(Box::new(T::kind()))
    }
}

// Box is transparent to serde, so it takes the kind of what it holds.
impl<T: Describe> Describe for Box<T> {
    fn kind() -> FieldKind {
        T::kind()
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn kind() -> FieldKind {
        FieldKind::Mapping(Box::new(K::kind()), Box::new(V::kind()))
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn kind() -> FieldKind {
        FieldKind::Mapping(Box::new(K::kind()), Box::new(V::kind()))
    }
}
