//! CLI command implementations
//!
//! Each command loads config, opens the database over a local blob
//! store, runs one operation, and writes an envelope. Operation
//! failures become error envelopes with the operation's code; only
//! setup failures (config, stdin) abort the process.

use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::blob::{BlobStore, LocalBlobStore};
use crate::config::Config;
use crate::core::{Database, DbResult};
use crate::document::registry_key;
use crate::schema::SchemaInput;

use super::args::{Command, EntryAction, SchemaAction};
use super::errors::{CliError, CliResult};
use super::io::{read_payload, write_error, write_error_with_details, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Schema { config, action } => schema(&config, action),
        Command::Entry { config, action } => entry(&config, action),
    }
}

/// Initialize the data directory and registry document
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    std::fs::create_dir_all(config.data_path()).map_err(|e| {
        CliError::config_error(format!("Failed to create data directory: {}", e))
    })?;

    let store: Arc<dyn BlobStore> =
        Arc::new(LocalBlobStore::new(config.data_path().to_path_buf()));

    match store.head(&registry_key(&config.key_prefix)) {
        Ok(true) => return Err(CliError::already_initialized()),
        Ok(false) => {}
        Err(e) => return Err(CliError::io_error(e.to_string())),
    }

    // First read writes the empty registry document
    let db = Database::open(store, &config);
    db.list_schemas()
        .map_err(|e| CliError::io_error(e.to_string()))?;

    write_response(json!({"initialized": true}))
}

/// Schema management commands
pub fn schema(config_path: &Path, action: SchemaAction) -> CliResult<()> {
    let db = open_database(config_path)?;

    let result = match action {
        SchemaAction::List => db.list_schemas().map(|schemas| json!({"schemas": schemas})),
        SchemaAction::Show { id } => db.get_schema(&id).map(|schema| json!({"schema": schema})),
        SchemaAction::Create => {
            let input = read_schema_input()?;
            db.create_schema(input).map(|schema| json!({"schema": schema}))
        }
        SchemaAction::Update { id } => {
            let input = read_schema_input()?;
            db.update_schema(&id, input)
                .map(|schema| json!({"schema": schema}))
        }
        SchemaAction::Delete { id } => db.delete_schema(&id).map(|_| json!({"deleted": true})),
    };

    finish(result)
}

/// Record management commands
pub fn entry(config_path: &Path, action: EntryAction) -> CliResult<()> {
    let db = open_database(config_path)?;

    let result = match action {
        EntryAction::List { schema } => db
            .list_entries(&schema)
            .map(|entries| json!({"entries": entries})),
        EntryAction::Show { schema, id } => db
            .get_entry(&schema, &id)
            .map(|entry| json!({"entry": entry})),
        EntryAction::Add { schema } => {
            let values = read_payload()?;
            db.add_entry(&schema, values)
                .map(|entry| json!({"entry": entry}))
        }
        EntryAction::Update { schema, id } => {
            let values = read_payload()?;
            db.update_entry(&schema, &id, values)
                .map(|entry| json!({"entry": entry}))
        }
        EntryAction::Delete { schema, id } => {
            db.delete_entry(&schema, &id).map(|_| json!({"deleted": true}))
        }
        EntryAction::Template { schema } => db
            .entry_template(&schema)
            .map(|template| json!({"entry": template})),
    };

    finish(result)
}

fn open_database(config_path: &Path) -> CliResult<Database> {
    let config = Config::load(config_path)?;
    let store: Arc<dyn BlobStore> =
        Arc::new(LocalBlobStore::new(config.data_path().to_path_buf()));
    Ok(Database::open(store, &config))
}

fn read_schema_input() -> CliResult<SchemaInput> {
    let payload = read_payload()?;
    serde_json::from_value(Value::Object(payload))
        .map_err(|e| CliError::input_error(format!("Invalid schema payload: {}", e)))
}

/// Operation outcomes become envelopes; the process still exits zero
fn finish(result: DbResult<Value>) -> CliResult<()> {
    match result {
        Ok(data) => write_response(data),
        Err(e) => match e.validation_errors() {
            Some(details) => {
                write_error_with_details(e.code(), "Validation failed", json!(details))
            }
            None => write_error(e.code(), &e.to_string()),
        },
    }
}
