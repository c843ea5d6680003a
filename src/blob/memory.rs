//! # In-Memory Blob Store

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::{BlobError, BlobResult};
use super::store::BlobStore;

/// In-memory blob store
///
/// Backs tests and ephemeral setups. Objects live in a keyed map and
/// disappear with the process.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.read().map(|m| m.len()).unwrap_or(0)
    }

    /// True when no objects are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> BlobResult<Vec<u8>> {
        let objects = self
            .objects
            .read()
            .map_err(|_| BlobError::Backend("lock poisoned".into()))?;

        objects
            .get(key)
            .cloned()
            .ok_or_else(|| BlobError::NotFound(key.to_string()))
    }

    fn put(&self, key: &str, data: &[u8]) -> BlobResult<()> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| BlobError::Backend("lock poisoned".into()))?;

        objects.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn head(&self, key: &str) -> BlobResult<bool> {
        let objects = self
            .objects
            .read()
            .map_err(|_| BlobError::Backend("lock poisoned".into()))?;

        Ok(objects.contains_key(key))
    }
}
