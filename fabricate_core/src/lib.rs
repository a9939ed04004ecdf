//! Fixture fabrication for record types.
//!
//! A [`Generator`] fills the zero-valued fields of a record with type-driven
//! defaults, per-field overrides and named traits, and delegates nested record
//! fields to other generators through a [`Registry`].

pub mod config;
pub mod defaults;
mod engine;
pub mod error;
pub mod generator;
pub mod registry;
pub mod session;
pub mod shape;
pub mod trait_table;

pub use config::FabricateConfig;
pub use error::FabricateError;
pub use generator::Generator;
pub use registry::Registry;
pub use session::Session;
pub use shape::{Describe, FieldKind, FieldShape, Record, RecordShape};
pub use trait_table::{FieldOverride, Trait};
