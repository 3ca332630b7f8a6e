use std::env;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_flag};

fn default_total_count() -> bool {
    true
}

/// Toggles for optional checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Dataset-wide word/image total reconciliation
    #[serde(default = "default_total_count")]
    pub total_count: bool,
}

impl ChecksConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let total_count = match env::var("LEXIS_TOTAL_COUNT") {
            Ok(v) => parse_flag("LEXIS_TOTAL_COUNT", &v)?,
            Err(_) => default_total_count(),
        };

        Ok(Self { total_count })
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            total_count: default_total_count(),
        }
    }
}
