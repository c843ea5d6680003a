//! # ClayDB Document Module
//!
//! Whole-document persistence: the key layout for registry and
//! collection objects, and the cached store that serves them.

pub mod keys;
pub mod store;

pub use keys::{collection_key, registry_key};
pub use store::DocumentStore;
