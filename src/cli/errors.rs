//! Errors raised by the command-line front end.
//!
//! These cover setup problems: bad config, broken stdin, malformed
//! payloads. Operation failures travel in the response envelope
//! instead.

use std::fmt;
use std::io;

use crate::config::ConfigError;

/// Setup failure categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Config file unreadable or invalid
    ConfigError,
    /// stdin/stdout failure
    IoError,
    /// Malformed stdin payload
    InputError,
    /// Registry document already present at init
    AlreadyInitialized,
}

impl CliErrorCode {
    /// Stable string form printed to the user
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLAY_CLI_CONFIG_ERROR",
            Self::IoError => "CLAY_CLI_IO_ERROR",
            Self::InputError => "CLAY_CLI_INPUT_ERROR",
            Self::AlreadyInitialized => "CLAY_CLI_ALREADY_INITIALIZED",
        }
    }
}

/// A setup failure with its category and detail message
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InputError, msg)
    }

    pub fn already_initialized() -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            "Registry document already exists",
        )
    }

    /// The failure category
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// The category's stable string form
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// The detail message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

/// Result alias used throughout the CLI layer
pub type CliResult<T> = Result<T, CliError>;
