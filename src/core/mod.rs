//! # ClayDB Core Module
//!
//! The database facade and the error taxonomy it speaks.

pub mod database;
pub mod error;

pub use database::Database;
pub use error::{DbError, DbResult};
