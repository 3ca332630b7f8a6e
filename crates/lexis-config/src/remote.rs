use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_flag};

fn default_enabled() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Remote image reachability settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let enabled = match env::var("LEXIS_REMOTE") {
            Ok(v) => parse_flag("LEXIS_REMOTE", &v)?,
            Err(_) => default_enabled(),
        };

        let timeout_ms = match env::var("LEXIS_HTTP_TIMEOUT_MS") {
            Ok(v) => parse_timeout_ms("LEXIS_HTTP_TIMEOUT_MS", &v)?,
            Err(_) => default_timeout_ms(), // 10 seconds default
        };

        Ok(Self {
            enabled,
            timeout_ms,
        })
    }

    /// A zero timeout would fail every request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "remote.timeout_ms",
                value: "0".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Positive millisecond count
pub(crate) fn parse_timeout_ms(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
