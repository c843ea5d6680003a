//! # Blob Storage Errors

use thiserror::Error;

/// Result type for blob operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Blob storage errors
#[derive(Debug, Clone, Error)]
pub enum BlobError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Corrupt document at '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Backend error: {0}")]
    Backend(String),
}

impl BlobError {
    /// True for the absent-object case
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlobError::NotFound(_))
    }
}
