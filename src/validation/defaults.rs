//! # Field Defaults

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::schema::{FieldDefinition, FieldType, SchemaDefinition};

/// Default value for a field with no input
///
/// Date fields default to today in `YYYY-MM-DD` form; select fields
/// take their first option.
pub fn default_value(field: &FieldDefinition) -> Value {
    match field.field_type {
        FieldType::Text | FieldType::Textarea | FieldType::Email | FieldType::Url => json!(""),
        FieldType::Number => json!(0),
        FieldType::Boolean => json!(false),
        FieldType::Date => json!(Utc::now().date_naive().to_string()),
        FieldType::Select => {
            let first = field
                .validation
                .as_ref()
                .and_then(|v| v.options.as_ref())
                .and_then(|options| options.first())
                .cloned()
                .unwrap_or_default();
            json!(first)
        }
    }
}

/// Blank record payload with a default for every schema field
pub fn record_template(schema: &SchemaDefinition) -> Map<String, Value> {
    schema
        .fields
        .iter()
        .map(|field| (field.name.clone(), default_value(field)))
        .collect()
}
