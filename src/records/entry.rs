//! # Data Entries
//!
//! One record in a collection. Schema-declared values flatten next to
//! the managed keys, so a stored entry reads as one flat JSON object:
//!
//! ```json
//! {"id": "...", "createdAt": "...", "updatedAt": "...", "title": "Hello"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Keys the store manages itself; payloads may not claim them
pub const RESERVED_KEYS: [&str; 3] = ["id", "createdAt", "updatedAt"];

/// One record in a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub id: String,

    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl DataEntry {
    /// Build a fresh entry around the payload
    pub fn new(values: Map<String, Value>) -> Self {
        let now = Utc::now();
        let mut entry = Self {
            id: Uuid::new_v4().to_string(),
            created_at: Some(now),
            updated_at: Some(now),
            values: Map::new(),
        };
        entry.merge(values);
        entry
    }

    /// Value stored under a schema field name
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Fold payload keys into the entry
    ///
    /// Managed keys in the payload are dropped, so a caller cannot
    /// overwrite id or creation stamp through a record write.
    pub fn merge(&mut self, values: Map<String, Value>) {
        for (key, value) in values {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                self.values.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_new_assigns_id_and_stamps() {
        let entry = DataEntry::new(payload(json!({"title": "Hello"})));

        assert!(!entry.id.is_empty());
        assert!(entry.created_at.is_some());
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(entry.value("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = DataEntry::new(Map::new());
        let b = DataEntry::new(Map::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_merge_drops_managed_keys() {
        let mut entry = DataEntry::new(payload(json!({"title": "Hello"})));
        let original_id = entry.id.clone();
        let original_created = entry.created_at;

        entry.merge(payload(json!({
            "id": "hijacked",
            "createdAt": "1999-01-01T00:00:00Z",
            "title": "Changed"
        })));

        assert_eq!(entry.id, original_id);
        assert_eq!(entry.created_at, original_created);
        assert_eq!(entry.value("title"), Some(&json!("Changed")));
        assert!(entry.value("id").is_none());
    }

    #[test]
    fn test_serializes_flat() {
        let entry = DataEntry::new(payload(json!({"title": "Hello", "views": 3})));
        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("id"));
        assert!(object.contains_key("createdAt"));
        assert!(object.contains_key("updatedAt"));
        assert_eq!(object.get("title"), Some(&json!("Hello")));
        assert_eq!(object.get("views"), Some(&json!(3)));
    }

    #[test]
    fn test_reads_entry_without_stamps() {
        // Hand-edited collection documents may lack stamps
        let entry: DataEntry =
            serde_json::from_str(r#"{"id": "e1", "title": "Old"}"#).unwrap();

        assert_eq!(entry.id, "e1");
        assert!(entry.created_at.is_none());
        assert!(entry.updated_at.is_none());
        assert_eq!(entry.value("title"), Some(&json!("Old")));
    }
}
