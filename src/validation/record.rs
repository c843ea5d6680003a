//! # Record Checks

use serde_json::{Map, Value};

use super::errors::ValidationErrors;
use super::field::check_field;
use crate::schema::SchemaDefinition;

/// Check a record payload against every field of its schema
///
/// All fields are checked in one pass so the result names every
/// failure at once. Keys the schema does not declare pass through
/// unchecked.
pub fn check_record(values: &Map<String, Value>, schema: &SchemaDefinition) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in &schema.fields {
        if let Some(message) = check_field(values.get(&field.name), field) {
            errors.insert(field.name.clone(), message);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDefinition, FieldType, SchemaDefinition};
    use chrono::Utc;
    use serde_json::json;

    fn posts_schema() -> SchemaDefinition {
        SchemaDefinition {
            id: "s1".into(),
            name: "posts".into(),
            display_name: "Posts".into(),
            fields: vec![
                FieldDefinition::new("title", "Title", FieldType::Text).required(),
                FieldDefinition::new("views", "Views", FieldType::Number),
            ],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn payload(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_valid_payload_has_no_errors() {
        let values = payload(json!({"title": "Hello", "views": 3}));
        assert!(check_record(&values, &posts_schema()).is_empty());
    }

    #[test]
    fn test_collects_every_failing_field() {
        let values = payload(json!({"views": "many"}));
        let errors = check_record(&values, &posts_schema());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("views"), Some("Views must be a number"));
    }

    #[test]
    fn test_undeclared_keys_are_ignored() {
        let values = payload(json!({"title": "Hello", "extra": {"any": "shape"}}));
        assert!(check_record(&values, &posts_schema()).is_empty());
    }
}
