//! JSON I/O handling for CLI
//!
//! - Input: one JSON object via stdin, read to the end so payloads
//!   may span lines
//! - Output: one JSON envelope per command via stdout

use std::io::{self, Read, Write};

use serde_json::{json, Map, Value};

use super::errors::{CliError, CliResult};

/// Read a JSON object payload from stdin
pub fn read_payload() -> CliResult<Map<String, Value>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::input_error("Empty input"));
    }

    let value: Value = serde_json::from_str(&input)
        .map_err(|e| CliError::input_error(format!("Invalid JSON payload: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::input_error("Payload must be a JSON object")),
    }
}

/// Write a success envelope to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    emit(json!({
        "status": "ok",
        "data": data
    }))
}

/// Write an error envelope to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    emit(json!({
        "status": "error",
        "code": code,
        "message": message
    }))
}

/// Write an error envelope with structured details to stdout
pub fn write_error_with_details(code: &str, message: &str, details: Value) -> CliResult<()> {
    emit(json!({
        "status": "error",
        "code": code,
        "message": message,
        "details": details
    }))
}

fn emit(envelope: Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &envelope)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
