//! # ClayDB Records Module
//!
//! Record collections and the CRUD store over them. A collection is
//! addressed by its schema name; the registry drives renames and
//! clears through the same store.

pub mod entry;
pub mod store;

pub use entry::{DataEntry, RESERVED_KEYS};
pub use store::RecordStore;
