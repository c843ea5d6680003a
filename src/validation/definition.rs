//! # Schema Definition Checks
//!
//! Gate for caller-supplied schema payloads before they reach the
//! registry. Error keys follow the payload shape (`name`,
//! `displayName`, `fields[0].name`, ...) so clients can attach
//! messages to inputs.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::errors::ValidationErrors;
use crate::records::RESERVED_KEYS;
use crate::schema::{FieldDefinition, FieldType, SchemaInput};

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// True when text is usable as a schema or field name
pub fn is_identifier(text: &str) -> bool {
    IDENT_RE.is_match(text)
}

/// Check a schema payload before registration
pub fn check_definition(input: &SchemaInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.name.is_empty() {
        errors.insert("name", "Schema name is required");
    } else if !is_identifier(&input.name) {
        errors.insert("name", "Schema name must be a valid identifier");
    }

    if input.display_name.is_empty() {
        errors.insert("displayName", "Display name is required");
    }

    if input.fields.is_empty() {
        errors.insert("fields", "At least one field is required");
    }

    let mut seen = BTreeSet::new();
    for (index, field) in input.fields.iter().enumerate() {
        check_field_definition(index, field, &mut seen, &mut errors);
    }

    errors
}

fn check_field_definition(
    index: usize,
    field: &FieldDefinition,
    seen: &mut BTreeSet<String>,
    errors: &mut ValidationErrors,
) {
    let name_key = format!("fields[{}].name", index);

    if field.name.is_empty() {
        errors.insert(name_key, "Field name is required");
    } else if !is_identifier(&field.name) {
        errors.insert(name_key, "Field name must be a valid identifier");
    } else if RESERVED_KEYS.contains(&field.name.as_str()) {
        errors.insert(name_key, format!("Field name '{}' is reserved", field.name));
    } else if !seen.insert(field.name.clone()) {
        errors.insert(name_key, format!("Duplicate field name '{}'", field.name));
    }

    if field.label.is_empty() {
        errors.insert(format!("fields[{}].label", index), "Field label is required");
    }

    if let Some(rules) = &field.validation {
        if let Some(pattern) = &rules.pattern {
            if Regex::new(pattern).is_err() {
                errors.insert(
                    format!("fields[{}].validation.pattern", index),
                    "Pattern must be a valid regular expression",
                );
            }
        }

        if let (Some(min), Some(max)) = (rules.min, rules.max) {
            if min > max {
                errors.insert(
                    format!("fields[{}].validation", index),
                    "min must not exceed max",
                );
            }
        }
    }

    if field.field_type == FieldType::Select {
        let has_options = field
            .validation
            .as_ref()
            .and_then(|v| v.options.as_ref())
            .map(|options| !options.is_empty())
            .unwrap_or(false);

        if !has_options {
            errors.insert(
                format!("fields[{}].validation.options", index),
                "Select fields need at least one option",
            );
        }
    }
}
