//! # Database Facade
//!
//! One handle over the registry and the record store. Operations
//! resolve schemas by id, run validation, and map misses onto the
//! error taxonomy; everything below works in terms of collection
//! names.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::blob::{BlobStore, DocumentAdapter};
use crate::config::Config;
use crate::observability::{log_event_with_fields, Event};
use crate::records::{DataEntry, RecordStore};
use crate::schema::{SchemaDefinition, SchemaInput, SchemaRegistry};
use crate::validation::{check_definition, check_record, record_template};

use super::error::{DbError, DbResult};

/// A schema-first record store over one blob backend
#[derive(Debug)]
pub struct Database {
    registry: SchemaRegistry,
    records: Arc<RecordStore>,
}

impl Database {
    /// Open a database over a blob backend
    pub fn open(store: Arc<dyn BlobStore>, config: &Config) -> Self {
        let adapter = if config.pretty_json {
            DocumentAdapter::new(store)
        } else {
            DocumentAdapter::new(store).compact()
        };

        let records = Arc::new(RecordStore::new(adapter.clone(), config.key_prefix.as_str()));
        let registry = SchemaRegistry::new(adapter, records.clone(), &config.key_prefix);

        log_event_with_fields(Event::DatabaseOpened, &[("prefix", &config.key_prefix)]);

        Self { registry, records }
    }

    /// The schema registry
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The record store
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    // ===== Schema operations =====

    /// All registered schemas
    pub fn list_schemas(&self) -> DbResult<Vec<SchemaDefinition>> {
        Ok(self.registry.list()?)
    }

    /// One schema by id
    pub fn get_schema(&self, id: &str) -> DbResult<SchemaDefinition> {
        self.registry
            .get(id)?
            .ok_or_else(|| DbError::SchemaNotFound(id.to_string()))
    }

    /// Validate and register a schema
    pub fn create_schema(&self, input: SchemaInput) -> DbResult<SchemaDefinition> {
        check_definition(&input)
            .into_result()
            .map_err(DbError::Validation)?;

        Ok(self.registry.create(input)?)
    }

    /// Validate and replace a schema definition
    ///
    /// A rename carries the record collection along.
    pub fn update_schema(&self, id: &str, input: SchemaInput) -> DbResult<SchemaDefinition> {
        check_definition(&input)
            .into_result()
            .map_err(DbError::Validation)?;

        Ok(self.registry.update(id, input)?)
    }

    /// Remove a schema and clear its records
    pub fn delete_schema(&self, id: &str) -> DbResult<()> {
        if self.registry.delete(id)? {
            Ok(())
        } else {
            Err(DbError::SchemaNotFound(id.to_string()))
        }
    }

    // ===== Record operations =====

    /// All records of a schema
    pub fn list_entries(&self, schema_id: &str) -> DbResult<Vec<DataEntry>> {
        let schema = self.get_schema(schema_id)?;
        Ok(self.records.list(&schema.name)?)
    }

    /// One record by id
    pub fn get_entry(&self, schema_id: &str, entry_id: &str) -> DbResult<DataEntry> {
        let schema = self.get_schema(schema_id)?;

        self.records
            .get(&schema.name, entry_id)?
            .ok_or_else(|| DbError::EntryNotFound {
                schema: schema.name,
                id: entry_id.to_string(),
            })
    }

    /// Validate and append a record
    pub fn add_entry(&self, schema_id: &str, values: Map<String, Value>) -> DbResult<DataEntry> {
        let schema = self.get_schema(schema_id)?;

        check_record(&values, &schema)
            .into_result()
            .map_err(DbError::Validation)?;

        Ok(self.records.add(&schema.name, values)?)
    }

    /// Validate and merge a record update
    ///
    /// The payload must satisfy the schema on its own, so a required
    /// field cannot be dropped by leaving it out.
    pub fn update_entry(
        &self,
        schema_id: &str,
        entry_id: &str,
        values: Map<String, Value>,
    ) -> DbResult<DataEntry> {
        let schema = self.get_schema(schema_id)?;

        check_record(&values, &schema)
            .into_result()
            .map_err(DbError::Validation)?;

        self.records
            .update(&schema.name, entry_id, values)?
            .ok_or_else(|| DbError::EntryNotFound {
                schema: schema.name,
                id: entry_id.to_string(),
            })
    }

    /// Remove a record
    pub fn delete_entry(&self, schema_id: &str, entry_id: &str) -> DbResult<()> {
        let schema = self.get_schema(schema_id)?;

        if self.records.delete(&schema.name, entry_id)? {
            Ok(())
        } else {
            Err(DbError::EntryNotFound {
                schema: schema.name,
                id: entry_id.to_string(),
            })
        }
    }

    /// Blank payload with a default for every schema field
    pub fn entry_template(&self, schema_id: &str) -> DbResult<Map<String, Value>> {
        let schema = self.get_schema(schema_id)?;
        Ok(record_template(&schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlobStore;
    use crate::schema::{FieldDefinition, FieldType};
    use serde_json::json;

    fn database() -> Database {
        let store = Arc::new(MemoryBlobStore::new());
        Database::open(store, &Config::default())
    }

    fn posts_input() -> SchemaInput {
        SchemaInput {
            name: "posts".into(),
            display_name: "Posts".into(),
            fields: vec![
                FieldDefinition::new("title", "Title", FieldType::Text).required(),
                FieldDefinition::new("views", "Views", FieldType::Number),
            ],
        }
    }

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_create_schema_rejects_bad_definition() {
        let db = database();

        let mut input = posts_input();
        input.name = "bad name".into();

        let err = db.create_schema(input).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_FAILED");
        assert!(err.validation_errors().unwrap().get("name").is_some());
    }

    #[test]
    fn test_entry_round_trip() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();

        let entry = db
            .add_entry(&schema.id, payload(json!({"title": "Hello", "views": 2})))
            .unwrap();
        let fetched = db.get_entry(&schema.id, &entry.id).unwrap();

        assert_eq!(fetched.value("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_add_entry_validates_payload() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();

        let err = db
            .add_entry(&schema.id, payload(json!({"views": "many"})))
            .unwrap_err();

        let map = err.validation_errors().unwrap();
        assert_eq!(map.get("title"), Some("Title is required"));
        assert_eq!(map.get("views"), Some("Views must be a number"));
    }

    #[test]
    fn test_update_entry_requires_full_payload() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();
        let entry = db
            .add_entry(&schema.id, payload(json!({"title": "Hello"})))
            .unwrap();

        // Omitting the required title fails even though the stored
        // entry already has one
        let err = db
            .update_entry(&schema.id, &entry.id, payload(json!({"views": 5})))
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_FAILED");
    }

    #[test]
    fn test_unknown_schema_id() {
        let db = database();

        let err = db.list_entries("unknown").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(matches!(err, DbError::SchemaNotFound(id) if id == "unknown"));
    }

    #[test]
    fn test_unknown_entry_id() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();

        let err = db.get_entry(&schema.id, "missing").unwrap_err();
        assert!(matches!(err, DbError::EntryNotFound { .. }));

        let err = db.delete_entry(&schema.id, "missing").unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_delete_schema_then_entries_gone() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();
        db.add_entry(&schema.id, payload(json!({"title": "Hello"})))
            .unwrap();

        db.delete_schema(&schema.id).unwrap();

        assert_eq!(db.delete_schema(&schema.id).unwrap_err().code(), "NOT_FOUND");
        // The collection itself was cleared
        assert!(db.records().list("posts").unwrap().is_empty());
    }

    #[test]
    fn test_entry_template_uses_defaults() {
        let db = database();
        let schema = db.create_schema(posts_input()).unwrap();

        let template = db.entry_template(&schema.id).unwrap();
        assert_eq!(template.get("title"), Some(&json!("")));
        assert_eq!(template.get("views"), Some(&json!(0)));
    }
}
