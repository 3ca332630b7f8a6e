use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Which word entry layout is in force for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// Six keys, with an integer `frequency` rank
    #[default]
    Ranked,
    /// Five keys, no `frequency`, `examples` and `definition` must be non-empty
    Plain,
}

impl SchemaVariant {
    /// Exact number of top-level keys a word entry must have
    pub fn key_count(&self) -> usize {
        match self {
            SchemaVariant::Ranked => 6,
            SchemaVariant::Plain => 5,
        }
    }

    pub fn requires_frequency(&self) -> bool {
        matches!(self, SchemaVariant::Ranked)
    }

    pub fn requires_non_empty_lists(&self) -> bool {
        matches!(self, SchemaVariant::Plain)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Ranked => "ranked",
            SchemaVariant::Plain => "plain",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ranked" => Ok(SchemaVariant::Ranked),
            "plain" => Ok(SchemaVariant::Plain),
            other => Err(ConfigError::InvalidValue {
                key: "schema variant",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub variant: SchemaVariant,
}

impl SchemaConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let variant = match env::var("LEXIS_SCHEMA") {
            Ok(v) => v.parse()?,
            Err(_) => SchemaVariant::default(),
        };

        Ok(Self { variant })
    }
}
