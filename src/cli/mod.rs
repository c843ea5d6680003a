//! CLI module for ClayDB
//!
//! Provides command-line interface for:
//! - init: Create the data directory and registry document
//! - schema: Register, inspect, update, and delete schemas
//! - entry: CRUD over records of a schema

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, EntryAction, SchemaAction};
pub use commands::{entry, init, run, run_command, schema};
pub use errors::{CliError, CliResult};
pub use io::{read_payload, write_error, write_response};
