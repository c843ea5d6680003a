//! # Local Filesystem Blob Store

use std::fs;
use std::path::PathBuf;

use super::errors::{BlobError, BlobResult};
use super::store::BlobStore;

/// Local filesystem blob store
///
/// Keys become paths under the root; `put` creates missing parent
/// directories so callers never pre-create the layout.
#[derive(Debug)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn full_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl BlobStore for LocalBlobStore {
    fn get(&self, key: &str) -> BlobResult<Vec<u8>> {
        let full_path = self.full_path(key);

        fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlobError::NotFound(key.to_string())
            } else {
                BlobError::Io(e.to_string())
            }
        })
    }

    fn put(&self, key: &str, data: &[u8]) -> BlobResult<()> {
        let full_path = self.full_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BlobError::Io(e.to_string()))?;
        }

        fs::write(&full_path, data).map_err(|e| BlobError::Io(e.to_string()))
    }

    fn head(&self, key: &str) -> BlobResult<bool> {
        Ok(self.full_path(key).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_put_get() {
        let temp = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp.path().to_path_buf());

        store.put("schemas.json", b"[]").unwrap();
        let data = store.get("schemas.json").unwrap();
        assert_eq!(data, b"[]");
    }

    #[test]
    fn test_put_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp.path().to_path_buf());

        store.put("data/posts.json", b"[]").unwrap();
        assert!(temp.path().join("data").join("posts.json").exists());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp.path().to_path_buf());

        let err = store.get("missing.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_head() {
        let temp = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp.path().to_path_buf());

        assert!(!store.head("data/posts.json").unwrap());
        store.put("data/posts.json", b"[]").unwrap();
        assert!(store.head("data/posts.json").unwrap());
    }

    #[test]
    fn test_put_replaces_whole_object() {
        let temp = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp.path().to_path_buf());

        store.put("schemas.json", b"[1,2,3]").unwrap();
        store.put("schemas.json", b"[]").unwrap();
        assert_eq!(store.get("schemas.json").unwrap(), b"[]");
    }
}
