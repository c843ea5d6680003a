//! claydb - A schema-first record store over opaque blob storage
//!
//! Schemas are defined at runtime and validated on every write. Each
//! schema owns one record collection, persisted as a whole JSON
//! document behind a GET/PUT/HEAD blob interface.

pub mod blob;
pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod observability;
pub mod records;
pub mod schema;
pub mod validation;
