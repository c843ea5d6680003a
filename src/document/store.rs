//! # Keyed Document Store
//!
//! Caches deserialized documents by key on top of the adapter. First
//! access loads from storage; an absent document is initialized by
//! persisting the caller's default before it enters the cache. Writes
//! go through to storage first so a failed put never leaves the cache
//! ahead of the backing object.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::blob::{BlobError, BlobResult, DocumentAdapter};

fn poisoned() -> BlobError {
    BlobError::Backend("lock poisoned".into())
}

/// Cache of whole documents keyed by blob key
#[derive(Debug)]
pub struct DocumentStore<T> {
    adapter: DocumentAdapter,
    cache: RwLock<HashMap<String, T>>,
}

impl<T> DocumentStore<T>
where
    T: Clone + Serialize + DeserializeOwned,
{
    /// Create an empty store over the given adapter
    pub fn new(adapter: DocumentAdapter) -> Self {
        Self {
            adapter,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the document at key, loading or initializing it on miss
    ///
    /// The default is persisted before being served so a fresh key is
    /// readable by the next process even if nothing is written later.
    pub fn get(&self, key: &str, default: T) -> BlobResult<T> {
        {
            let cache = self.cache.read().map_err(|_| poisoned())?;
            if let Some(value) = cache.get(key) {
                return Ok(value.clone());
            }
        }

        let loaded = match self.adapter.read::<T>(key)? {
            Some(value) => value,
            None => {
                self.adapter.write(key, &default)?;
                default
            }
        };

        let mut cache = self.cache.write().map_err(|_| poisoned())?;
        let value = cache.entry(key.to_string()).or_insert(loaded).clone();
        Ok(value)
    }

    /// Persist the document at key, then update the cache
    pub fn put(&self, key: &str, value: T) -> BlobResult<()> {
        self.adapter.write(key, &value)?;

        let mut cache = self.cache.write().map_err(|_| poisoned())?;
        cache.insert(key.to_string(), value);
        Ok(())
    }

    /// Drop the cached copy of key, if any
    ///
    /// Storage is untouched; the next `get` reloads from the adapter.
    pub fn evict(&self, key: &str) -> BlobResult<()> {
        let mut cache = self.cache.write().map_err(|_| poisoned())?;
        cache.remove(key);
        Ok(())
    }

    /// True when key currently has a cached copy
    pub fn is_cached(&self, key: &str) -> bool {
        self.cache
            .read()
            .map(|cache| cache.contains_key(key))
            .unwrap_or(false)
    }
}
