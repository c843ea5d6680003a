//! Record CRUD Tests
//!
//! End-to-end record lifecycle through the database facade:
//! - Entries get ids and stamps on creation
//! - Updates merge payloads but never touch identity
//! - Deletes are idempotent at the store layer and report misses at
//!   the facade
//! - Collections persist as whole documents and survive reopen

use std::sync::Arc;

use claydb::blob::LocalBlobStore;
use claydb::config::Config;
use claydb::core::{Database, DbError};
use claydb::schema::{FieldDefinition, FieldType, SchemaInput};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn open_database(dir: &TempDir) -> Database {
    let store = Arc::new(LocalBlobStore::new(dir.path().to_path_buf()));
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

fn payload(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().unwrap().clone()
}

// =============================================================================
// Create and Read
// =============================================================================

/// A new entry carries an id, stamps, and the payload values.
#[test]
fn test_add_assigns_identity() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let entry = db
        .add_entry(&schema.id, payload(json!({"title": "Hello", "views": 4})))
        .unwrap();

    assert!(!entry.id.is_empty());
    assert!(entry.created_at.is_some());
    assert_eq!(entry.created_at, entry.updated_at);
    assert_eq!(entry.value("title"), Some(&json!("Hello")));
    assert_eq!(entry.value("views"), Some(&json!(4)));
}

/// Listing returns entries in insertion order.
#[test]
fn test_list_keeps_insertion_order() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let first = db.add_entry(&schema.id, payload(json!({"title": "A"}))).unwrap();
    let second = db.add_entry(&schema.id, payload(json!({"title": "B"}))).unwrap();

    let ids: Vec<String> = db
        .list_entries(&schema.id)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

/// Fetching an unknown entry id reports NOT_FOUND with both names.
#[test]
fn test_get_unknown_entry() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let err = db.get_entry(&schema.id, "missing").unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert!(matches!(
        err,
        DbError::EntryNotFound { schema, id } if schema == "posts" && id == "missing"
    ));
}

// =============================================================================
// Update
// =============================================================================

/// Updates replace values but keep id and creation stamp.
#[test]
fn test_update_preserves_identity() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let entry = db
        .add_entry(&schema.id, payload(json!({"title": "Old"})))
        .unwrap();
    let updated = db
        .update_entry(&schema.id, &entry.id, payload(json!({"title": "New"})))
        .unwrap();

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.created_at, entry.created_at);
    assert!(updated.updated_at >= entry.updated_at);
    assert_eq!(updated.value("title"), Some(&json!("New")));
}

/// Reserved keys in the payload cannot hijack identity.
#[test]
fn test_update_ignores_reserved_keys_in_payload() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let entry = db
        .add_entry(&schema.id, payload(json!({"title": "Mine"})))
        .unwrap();
    let updated = db
        .update_entry(
            &schema.id,
            &entry.id,
            payload(json!({
                "title": "Mine",
                "id": "stolen",
                "createdAt": "1999-01-01T00:00:00Z"
            })),
        )
        .unwrap();

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.created_at, entry.created_at);
    assert!(updated.value("id").is_none());
}

/// Keys outside the schema are stored as given.
#[test]
fn test_undeclared_keys_pass_through() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let entry = db
        .add_entry(
            &schema.id,
            payload(json!({"title": "Hello", "tags": ["a", "b"]})),
        )
        .unwrap();

    let fetched = db.get_entry(&schema.id, &entry.id).unwrap();
    assert_eq!(fetched.value("tags"), Some(&json!(["a", "b"])));
}

/// Updating an unknown entry id reports NOT_FOUND.
#[test]
fn test_update_unknown_entry() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let err = db
        .update_entry(&schema.id, "missing", payload(json!({"title": "X"})))
        .unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

// =============================================================================
// Delete
// =============================================================================

/// The store reports whether a delete removed anything; repeating it
/// is harmless.
#[test]
fn test_store_delete_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();
    let entry = db
        .add_entry(&schema.id, payload(json!({"title": "Hello"})))
        .unwrap();

    assert!(db.records().delete("posts", &entry.id).unwrap());
    assert!(!db.records().delete("posts", &entry.id).unwrap());
}

/// The facade reports a miss as NOT_FOUND.
#[test]
fn test_facade_delete_reports_miss() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();
    let entry = db
        .add_entry(&schema.id, payload(json!({"title": "Hello"})))
        .unwrap();

    db.delete_entry(&schema.id, &entry.id).unwrap();
    let err = db.delete_entry(&schema.id, &entry.id).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

/// Deleting one entry leaves its neighbors untouched.
#[test]
fn test_delete_leaves_other_entries() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();

    let keep = db.add_entry(&schema.id, payload(json!({"title": "Keep"}))).unwrap();
    let removed = db.add_entry(&schema.id, payload(json!({"title": "Drop"}))).unwrap();

    db.delete_entry(&schema.id, &removed.id).unwrap();

    let remaining = db.list_entries(&schema.id).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}

// =============================================================================
// Persistence
// =============================================================================

/// Entries written by one process are visible to the next.
#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let (schema_id, entry_id) = {
        let db = open_database(&dir);
        let schema = db.create_schema(posts_input()).unwrap();
        let entry = db
            .add_entry(&schema.id, payload(json!({"title": "Durable", "views": 9})))
            .unwrap();
        (schema.id, entry.id)
    };

    let db = open_database(&dir);
    let entry = db.get_entry(&schema_id, &entry_id).unwrap();

    assert_eq!(entry.value("title"), Some(&json!("Durable")));
    assert_eq!(entry.value("views"), Some(&json!(9)));
}

/// The collection document on disk is a flat JSON array of entries.
#[test]
fn test_collection_document_shape() {
    let dir = TempDir::new().unwrap();
    let db = open_database(&dir);
    let schema = db.create_schema(posts_input()).unwrap();
    db.add_entry(&schema.id, payload(json!({"title": "Hello"}))).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("data").join("posts.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    let object = array[0].as_object().unwrap();
    assert!(object.contains_key("id"));
    assert!(object.contains_key("createdAt"));
    assert_eq!(object.get("title"), Some(&json!("Hello")));
}
