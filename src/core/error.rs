//! # Database Errors
//!
//! The taxonomy every operation resolves to: not found, validation
//! failed, name conflict, or storage failure. Codes are stable
//! strings for machine consumers; validation failures keep their
//! per-field map.

use thiserror::Error;

use crate::blob::BlobError;
use crate::schema::RegistryError;
use crate::validation::ValidationErrors;

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Top-level operation errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Entry not found: {schema}/{id}")]
    EntryNotFound { schema: String, id: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Schema name already in use: {0}")]
    NameConflict(String),

    #[error(transparent)]
    Storage(#[from] BlobError),
}

impl DbError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DbError::SchemaNotFound(_) | DbError::EntryNotFound { .. } => "NOT_FOUND",
            DbError::Validation(_) => "VALIDATION_FAILED",
            DbError::NameConflict(_) => "NAME_CONFLICT",
            DbError::Storage(_) => "STORAGE_FAILURE",
        }
    }

    /// The per-field map, for validation failures
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DbError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<RegistryError> for DbError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NameConflict(name) => DbError::NameConflict(name),
            RegistryError::NotFound(id) => DbError::SchemaNotFound(id),
            RegistryError::Storage(e) => DbError::Storage(e),
        }
    }
}
