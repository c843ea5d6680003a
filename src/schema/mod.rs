//! # ClayDB Schema Module
//!
//! Schema definitions and the registry that owns them. A schema's
//! name addresses its record collection, so registry operations that
//! touch names also touch collections.

pub mod errors;
pub mod registry;
pub mod types;

pub use errors::{RegistryError, RegistryResult};
pub use registry::SchemaRegistry;
pub use types::{FieldDefinition, FieldType, FieldValidation, SchemaDefinition, SchemaInput};
