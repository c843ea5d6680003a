//! # ClayDB Blob Storage Module
//!
//! Opaque blob access behind a small GET/PUT/HEAD trait, with a typed
//! document adapter layered on top. Backends only move bytes; JSON
//! shape and caching live above them.

pub mod adapter;
pub mod errors;
pub mod local;
pub mod memory;
pub mod store;

pub use adapter::DocumentAdapter;
pub use errors::{BlobError, BlobResult};
pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
pub use store::BlobStore;
