//! # Schema Registry
//!
//! Registered schemas live in one JSON array document. Names double
//! as collection addresses, so the registry owns name uniqueness and
//! drives collection lifecycle through the record store.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::blob::DocumentAdapter;
use crate::document::{registry_key, DocumentStore};
use crate::observability::{log_event_with_fields, Event};
use crate::records::RecordStore;

use super::errors::{RegistryError, RegistryResult};
use super::types::{SchemaDefinition, SchemaInput};

/// The schema registry
#[derive(Debug)]
pub struct SchemaRegistry {
    docs: DocumentStore<Vec<SchemaDefinition>>,
    records: Arc<RecordStore>,
    key: String,
}

impl SchemaRegistry {
    /// Create a registry over the given adapter
    pub fn new(adapter: DocumentAdapter, records: Arc<RecordStore>, prefix: &str) -> Self {
        Self {
            docs: DocumentStore::new(adapter),
            records,
            key: registry_key(prefix),
        }
    }

    /// All registered schemas, oldest first
    pub fn list(&self) -> RegistryResult<Vec<SchemaDefinition>> {
        Ok(self.docs.get(&self.key, Vec::new())?)
    }

    /// One schema by id
    pub fn get(&self, id: &str) -> RegistryResult<Option<SchemaDefinition>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    /// Register a schema and initialize its collection
    ///
    /// The registry commits first; an empty collection document
    /// follows. A crash between the two heals on first access, which
    /// initializes the missing collection the same way.
    pub fn create(&self, input: SchemaInput) -> RegistryResult<SchemaDefinition> {
        let mut schemas = self.list()?;

        if schemas.iter().any(|s| s.name == input.name) {
            return Err(RegistryError::NameConflict(input.name));
        }

        let now = Utc::now();
        let schema = SchemaDefinition {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            display_name: input.display_name,
            fields: input.fields,
            created_at: now,
            updated_at: now,
        };

        schemas.push(schema.clone());
        self.docs.put(&self.key, schemas)?;
        self.records.init_collection(&schema.name)?;

        log_event_with_fields(
            Event::SchemaCreated,
            &[("id", &schema.id), ("schema", &schema.name)],
        );
        Ok(schema)
    }

    /// Replace a schema definition
    ///
    /// A rename copies the record collection to the new name before
    /// the registry commits, so a committed registry never points at
    /// a collection that has not been written.
    pub fn update(&self, id: &str, input: SchemaInput) -> RegistryResult<SchemaDefinition> {
        let mut schemas = self.list()?;

        if schemas.iter().any(|s| s.name == input.name && s.id != id) {
            return Err(RegistryError::NameConflict(input.name));
        }

        let position = schemas
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let previous = schemas[position].clone();
        if previous.name != input.name {
            self.records.migrate(&previous.name, &input.name)?;
        }

        let schema = SchemaDefinition {
            id: previous.id,
            name: input.name,
            display_name: input.display_name,
            fields: input.fields,
            created_at: previous.created_at,
            updated_at: Utc::now(),
        };

        schemas[position] = schema.clone();
        self.docs.put(&self.key, schemas)?;

        if previous.name != schema.name {
            log_event_with_fields(
                Event::SchemaUpdated,
                &[
                    ("id", &schema.id),
                    ("renamed_from", &previous.name),
                    ("schema", &schema.name),
                ],
            );
        } else {
            log_event_with_fields(
                Event::SchemaUpdated,
                &[("id", &schema.id), ("schema", &schema.name)],
            );
        }
        Ok(schema)
    }

    /// Remove a schema and clear its collection
    ///
    /// Returns false when the id is unknown. The registry commits
    /// first; a crash before the clear leaves an orphan collection
    /// document behind, never a registered schema without one.
    pub fn delete(&self, id: &str) -> RegistryResult<bool> {
        let mut schemas = self.list()?;

        let position = match schemas.iter().position(|s| s.id == id) {
            Some(position) => position,
            None => return Ok(false),
        };

        let schema = schemas.remove(position);
        self.docs.put(&self.key, schemas)?;
        self.records.clear_collection(&schema.name)?;

        log_event_with_fields(
            Event::SchemaDeleted,
            &[("id", &schema.id), ("schema", &schema.name)],
        );
        Ok(true)
    }
}
