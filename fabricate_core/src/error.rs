use thiserror::Error;

/// Errors that abort a fabrication call.
///
/// Fields that simply cannot be synthesized (unsupported kinds, missing registry
/// entries, the nesting ceiling) are not errors; they are left at their zero value.
#[derive(Error, Debug)]
pub enum FabricateError {
    /// A trait name passed to `fabricate` was never defined on the generator.
    #[error("Attempted to fabricate {record} with an unregistered trait: {trait_name}")]
    UnregisteredTrait { record: String, trait_name: String },

    /// The assembled record could not be converted back into its concrete type,
    /// typically because an override returned a value of the wrong type.
    #[error("Fabricated value for {record} does not match its declared type: {source}")]
    TypeMismatch {
        record: String,
        #[source]
        source: serde_json::Error,
    },

    /// A template or override value could not be represented as a dynamic value.
    #[error("Failed to serialize a value for {record}: {source}")]
    Serialization {
        record: String,
        #[source]
        source: serde_json::Error,
    },

    /// The template type does not serialize to a field map.
    #[error("Template for {record} does not serialize to a record with named fields")]
    NotARecord { record: String },
}
