//! # ClayDB Validation Module
//!
//! Three layers of checks:
//! - definition: schema payloads before they enter the registry
//! - field: one value against one field's type and rules
//! - record: a whole payload against a schema
//!
//! Plus defaults for populating blank records.

pub mod defaults;
pub mod definition;
pub mod errors;
pub mod field;
pub mod record;

pub use defaults::{default_value, record_template};
pub use definition::{check_definition, is_identifier};
pub use errors::ValidationErrors;
pub use field::check_field;
pub use record::check_record;
