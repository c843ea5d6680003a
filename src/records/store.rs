//! # Record Store
//!
//! CRUD over per-schema record collections. Each collection is one
//! whole JSON array document; every mutation rewrites it through the
//! document store.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::blob::{BlobResult, DocumentAdapter};
use crate::document::{collection_key, DocumentStore};
use crate::observability::{log_event_with_fields, Event};

use super::entry::DataEntry;

/// Record collections addressed by schema name
#[derive(Debug)]
pub struct RecordStore {
    docs: DocumentStore<Vec<DataEntry>>,
    prefix: String,
}

impl RecordStore {
    /// Create a store over the given adapter
    pub fn new(adapter: DocumentAdapter, prefix: impl Into<String>) -> Self {
        Self {
            docs: DocumentStore::new(adapter),
            prefix: prefix.into(),
        }
    }

    fn key(&self, collection: &str) -> String {
        collection_key(&self.prefix, collection)
    }

    /// All entries of a collection, oldest first
    pub fn list(&self, collection: &str) -> BlobResult<Vec<DataEntry>> {
        self.docs.get(&self.key(collection), Vec::new())
    }

    /// One entry by id
    pub fn get(&self, collection: &str, id: &str) -> BlobResult<Option<DataEntry>> {
        let entries = self.list(collection)?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    /// Append a fresh entry built from the payload
    pub fn add(&self, collection: &str, values: Map<String, Value>) -> BlobResult<DataEntry> {
        let key = self.key(collection);
        let mut entries = self.docs.get(&key, Vec::new())?;

        let entry = DataEntry::new(values);
        entries.push(entry.clone());
        self.docs.put(&key, entries)?;

        log_event_with_fields(
            Event::EntryAdded,
            &[("collection", collection), ("id", &entry.id)],
        );
        Ok(entry)
    }

    /// Merge the payload into an existing entry
    ///
    /// Returns `None` when the id is not present in the collection.
    pub fn update(
        &self,
        collection: &str,
        id: &str,
        values: Map<String, Value>,
    ) -> BlobResult<Option<DataEntry>> {
        let key = self.key(collection);
        let mut entries = self.docs.get(&key, Vec::new())?;

        let position = match entries.iter().position(|e| e.id == id) {
            Some(position) => position,
            None => return Ok(None),
        };

        entries[position].merge(values);
        entries[position].updated_at = Some(Utc::now());
        let updated = entries[position].clone();

        self.docs.put(&key, entries)?;

        log_event_with_fields(
            Event::EntryUpdated,
            &[("collection", collection), ("id", id)],
        );
        Ok(Some(updated))
    }

    /// Remove an entry; true when something was removed
    ///
    /// A miss writes nothing, so deleting twice is harmless.
    pub fn delete(&self, collection: &str, id: &str) -> BlobResult<bool> {
        let key = self.key(collection);
        let mut entries = self.docs.get(&key, Vec::new())?;

        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }

        self.docs.put(&key, entries)?;

        log_event_with_fields(
            Event::EntryDeleted,
            &[("collection", collection), ("id", id)],
        );
        Ok(true)
    }

    /// Write an empty collection document for a new schema
    pub fn init_collection(&self, collection: &str) -> BlobResult<()> {
        self.docs.put(&self.key(collection), Vec::new())?;

        log_event_with_fields(Event::CollectionInitialized, &[("collection", collection)]);
        Ok(())
    }

    /// Reset a collection to empty and drop it from the cache
    pub fn clear_collection(&self, collection: &str) -> BlobResult<()> {
        let key = self.key(collection);
        self.docs.put(&key, Vec::new())?;
        self.docs.evict(&key)?;

        log_event_with_fields(Event::CollectionCleared, &[("collection", collection)]);
        Ok(())
    }

    /// Copy a collection to a new name
    ///
    /// The new document must be in storage before any caller commits
    /// the rename, so the copy happens here in full: load old, write
    /// new, then drop the old cache entry. The old storage object is
    /// left behind.
    pub fn migrate(&self, from: &str, to: &str) -> BlobResult<()> {
        let entries = self.list(from)?;
        let count = entries.len().to_string();

        self.docs.put(&self.key(to), entries)?;
        self.docs.evict(&self.key(from))?;

        log_event_with_fields(
            Event::CollectionMigrated,
            &[("entries", &count), ("from", from), ("to", to)],
        );
        Ok(())
    }
}
