//! # Schema Registry Errors

use thiserror::Error;

use crate::blob::BlobError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Schema registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Schema name already in use: {0}")]
    NameConflict(String),

    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] BlobError),
}
