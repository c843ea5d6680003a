//! CLI argument definitions using clap
//!
//! Commands:
//! - claydb init --config <path>
//! - claydb schema <list|show|create|update|delete> --config <path>
//! - claydb entry <list|show|add|update|delete|template> --config <path>
//!
//! Create and update commands read their JSON payload from stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ClayDB - A schema-first record store over opaque blob storage
#[derive(Parser, Debug)]
#[command(name = "claydb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and registry document
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./claydb.json")]
        config: PathBuf,
    },

    /// Manage schemas
    Schema {
        /// Path to configuration file
        #[arg(long, default_value = "./claydb.json")]
        config: PathBuf,

        #[command(subcommand)]
        action: SchemaAction,
    },

    /// Manage records
    Entry {
        /// Path to configuration file
        #[arg(long, default_value = "./claydb.json")]
        config: PathBuf,

        #[command(subcommand)]
        action: EntryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SchemaAction {
    /// List registered schemas
    List,

    /// Show one schema
    Show {
        /// Schema id
        id: String,
    },

    /// Register a schema from a JSON payload on stdin
    Create,

    /// Replace a schema definition from a JSON payload on stdin
    Update {
        /// Schema id
        id: String,
    },

    /// Delete a schema and clear its records
    Delete {
        /// Schema id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntryAction {
    /// List records of a schema
    List {
        /// Schema id
        schema: String,
    },

    /// Show one record
    Show {
        /// Schema id
        schema: String,
        /// Record id
        id: String,
    },

    /// Add a record from a JSON payload on stdin
    Add {
        /// Schema id
        schema: String,
    },

    /// Update a record from a JSON payload on stdin
    Update {
        /// Schema id
        schema: String,
        /// Record id
        id: String,
    },

    /// Delete a record
    Delete {
        /// Schema id
        schema: String,
        /// Record id
        id: String,
    },

    /// Print a blank payload with field defaults
    Template {
        /// Schema id
        schema: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
