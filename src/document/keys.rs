//! # Document Key Layout
//!
//! One registry document plus one collection document per schema.
//! The prefix is either empty or ends with `/` so keys concatenate
//! without path logic.

/// Key of the schema registry document
pub fn registry_key(prefix: &str) -> String {
    format!("{}schemas.json", prefix)
}

/// Key of a record collection document
pub fn collection_key(prefix: &str, schema_name: &str) -> String {
    format!("{}data/{}.json", prefix, schema_name)
}
