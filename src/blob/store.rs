//! # Blob Store Trait

use super::errors::BlobResult;

/// Backend trait for opaque blob storage
///
/// Keys are flat strings; backends may map separators to directories
/// but no listing or partial reads are assumed. Every document is
/// fetched and replaced whole.
pub trait BlobStore: Send + Sync + std::fmt::Debug {
    /// Fetch the full object at key
    fn get(&self, key: &str) -> BlobResult<Vec<u8>>;

    /// Replace the object at key
    fn put(&self, key: &str, data: &[u8]) -> BlobResult<()>;

    /// Check whether an object exists at key
    fn head(&self, key: &str) -> BlobResult<bool>;
}
