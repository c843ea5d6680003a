//! # Observable Events
//!
//! Every state change the store makes is announced by one of these.
//! Schema and collection lifecycle log at INFO; per-record traffic
//! logs at TRACE.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Store opened over a blob backend
    DatabaseOpened,

    // Schema lifecycle
    /// Schema registered
    SchemaCreated,
    /// Schema definition replaced
    SchemaUpdated,
    /// Schema removed from the registry
    SchemaDeleted,

    // Collection lifecycle
    /// Empty collection document written
    CollectionInitialized,
    /// Collection document reset to empty
    CollectionCleared,
    /// Collection copied to a new key after a rename
    CollectionMigrated,

    // Record traffic
    /// Record appended to a collection
    EntryAdded,
    /// Record rewritten in place
    EntryUpdated,
    /// Record removed from a collection
    EntryDeleted,
}

impl Event {
    /// String form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DatabaseOpened => "DATABASE_OPENED",
            Event::SchemaCreated => "SCHEMA_CREATED",
            Event::SchemaUpdated => "SCHEMA_UPDATED",
            Event::SchemaDeleted => "SCHEMA_DELETED",
            Event::CollectionInitialized => "COLLECTION_INITIALIZED",
            Event::CollectionCleared => "COLLECTION_CLEARED",
            Event::CollectionMigrated => "COLLECTION_MIGRATED",
            Event::EntryAdded => "ENTRY_ADDED",
            Event::EntryUpdated => "ENTRY_UPDATED",
            Event::EntryDeleted => "ENTRY_DELETED",
        }
    }

    /// Severity the event logs at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DatabaseOpened
            | Event::SchemaCreated
            | Event::SchemaUpdated
            | Event::SchemaDeleted
            | Event::CollectionMigrated => Severity::Info,
            Event::CollectionInitialized
            | Event::CollectionCleared
            | Event::EntryAdded
            | Event::EntryUpdated
            | Event::EntryDeleted => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
