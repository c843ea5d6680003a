//! # Field Value Checks
//!
//! One value against one field definition. Messages are user-facing
//! and lead with the field label so clients can show them verbatim.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::schema::{FieldDefinition, FieldType};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check one value against its field definition
///
/// Returns the failure message, or `None` when the value passes. An
/// unpopulated value (absent, JSON null, or empty string) fails only
/// required fields; every other rule is skipped for it.
pub fn check_field(value: Option<&Value>, field: &FieldDefinition) -> Option<String> {
    if is_unpopulated(value) {
        if field.required {
            return Some(format!("{} is required", field.label));
        }
        return None;
    }

    let value = match value {
        Some(value) => value,
        None => return None,
    };

    match field.field_type {
        FieldType::Text | FieldType::Textarea => check_text(value, field),
        FieldType::Number => check_number(value, field),
        FieldType::Boolean => check_boolean(value, field),
        FieldType::Date => check_date(value, field),
        FieldType::Email => check_email(value, field),
        FieldType::Url => check_url(value, field),
        FieldType::Select => check_select(value, field),
    }
}

fn is_unpopulated(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn check_text(value: &Value, field: &FieldDefinition) -> Option<String> {
    let text = match value.as_str() {
        Some(text) => text,
        None => return Some(format!("{} must be text", field.label)),
    };

    if let Some(rules) = &field.validation {
        let len = text.chars().count() as f64;

        if let Some(min) = rules.min {
            if len < min {
                return Some(format!(
                    "{} must be at least {} characters",
                    field.label,
                    fmt_bound(min)
                ));
            }
        }
        if let Some(max) = rules.max {
            if len > max {
                return Some(format!(
                    "{} must be no more than {} characters",
                    field.label,
                    fmt_bound(max)
                ));
            }
        }
        if let Some(pattern) = &rules.pattern {
            // A pattern that no longer compiles rejects the value
            // instead of panicking
            match Regex::new(pattern) {
                Ok(re) if re.is_match(text) => {}
                _ => return Some(format!("{} format is invalid", field.label)),
            }
        }
    }

    None
}

fn check_number(value: &Value, field: &FieldDefinition) -> Option<String> {
    let num = match numeric_value(value) {
        Some(num) => num,
        None => return Some(format!("{} must be a number", field.label)),
    };

    if let Some(rules) = &field.validation {
        if let Some(min) = rules.min {
            if num < min {
                return Some(format!(
                    "{} must be at least {}",
                    field.label,
                    fmt_bound(min)
                ));
            }
        }
        if let Some(max) = rules.max {
            if num > max {
                return Some(format!(
                    "{} must be no more than {}",
                    field.label,
                    fmt_bound(max)
                ));
            }
        }
    }

    None
}

/// Numbers arrive as JSON numbers or as decimal strings from
/// form-style clients. The whole string must parse and the result
/// must be finite.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn check_boolean(value: &Value, field: &FieldDefinition) -> Option<String> {
    if value.is_boolean() {
        None
    } else {
        Some(format!("{} must be true or false", field.label))
    }
}

fn check_date(value: &Value, field: &FieldDefinition) -> Option<String> {
    match value.as_str() {
        Some(text)
            if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
                || DateTime::parse_from_rfc3339(text).is_ok() =>
        {
            None
        }
        _ => Some(format!("{} must be a valid date", field.label)),
    }
}

fn check_email(value: &Value, field: &FieldDefinition) -> Option<String> {
    match value.as_str() {
        Some(text) if EMAIL_RE.is_match(text) => None,
        _ => Some(format!("{} must be a valid email address", field.label)),
    }
}

fn check_url(value: &Value, field: &FieldDefinition) -> Option<String> {
    match value.as_str() {
        Some(text) if Url::parse(text).is_ok() => None,
        _ => Some(format!("{} must be a valid URL", field.label)),
    }
}

fn check_select(value: &Value, field: &FieldDefinition) -> Option<String> {
    let options = field.validation.as_ref().and_then(|v| v.options.as_ref());

    let accepted = match (value.as_str(), options) {
        (Some(text), Some(options)) => options.iter().any(|o| o == text),
        _ => false,
    };

    if accepted {
        None
    } else {
        Some(format!(
            "{} must be one of the available options",
            field.label
        ))
    }
}

/// Bounds are stored as f64 but usually hold whole counts
fn fmt_bound(bound: f64) -> String {
    if bound.fract() == 0.0 && bound.abs() < 1e15 {
        format!("{}", bound as i64)
    } else {
        bound.to_string()
    }
}
