use std::path::Path;

use serde::{Deserialize, Serialize};

use self::checks::ChecksConfig;
use self::paths::PathsConfig;
use self::remote::RemoteConfig;
use self::schema::SchemaConfig;

pub mod checks;
pub mod paths;
pub mod remote;
pub mod schema;

pub use self::schema::SchemaVariant;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub schema: SchemaConfig,
    pub remote: RemoteConfig,
    pub checks: ChecksConfig,
}

impl Config {
    /// Build from `LEXIS_*` environment variables, falling back to defaults
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Config {
            paths: PathsConfig::new(),
            schema: SchemaConfig::new()?,
            remote: RemoteConfig::new()?,
            checks: ChecksConfig::new()?,
        })
    }

    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.remote.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Parse a boolean-ish environment value
pub(crate) fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
        }),
    }
}
