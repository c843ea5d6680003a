//! # Document Adapter
//!
//! Typed JSON documents over the raw blob interface. A read probes
//! with HEAD before GET so an absent document comes back as `None`
//! rather than an error; only malformed payloads fail.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{BlobError, BlobResult};
use super::store::BlobStore;

/// Typed document access over a blob store
#[derive(Debug, Clone)]
pub struct DocumentAdapter {
    store: Arc<dyn BlobStore>,
    pretty: bool,
}

impl DocumentAdapter {
    /// Create an adapter that writes pretty-printed JSON
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            pretty: true,
        }
    }

    /// Switch to compact JSON output
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Read and deserialize the document at key
    ///
    /// Returns `Ok(None)` when the object does not exist, at the HEAD
    /// probe or at the GET that follows it.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> BlobResult<Option<T>> {
        match self.store.head(key) {
            Ok(false) => return Ok(None),
            Ok(true) => {}
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        }

        let data = match self.store.get(key) {
            Ok(data) => data,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let value = serde_json::from_slice(&data).map_err(|e| BlobError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(value))
    }

    /// Serialize and store the document at key
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> BlobResult<()> {
        let data = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|e| BlobError::Backend(format!("serialize failed: {}", e)))?;

        self.store.put(key, &data)
    }
}
