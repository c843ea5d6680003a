//! # Configuration
//!
//! One JSON file describes a deployment: where the local backend
//! keeps its objects, the key prefix shared by every document, and
//! how documents are rendered.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory for the local blob backend (required)
    pub data_dir: String,

    /// Prefix prepended to every object key (optional, default "")
    #[serde(default)]
    pub key_prefix: String,

    /// Pretty-print stored JSON documents (optional, default true)
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "./claydb-data".to_string(),
            key_prefix: String::new(),
            pretty_json: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".into()));
        }

        // Keys concatenate as "{prefix}{name}.json"
        if !self.key_prefix.is_empty() && !self.key_prefix.ends_with('/') {
            return Err(ConfigError::Invalid(
                "key_prefix must be empty or end with '/'".into(),
            ));
        }

        Ok(())
    }

    /// Data directory as a path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}
