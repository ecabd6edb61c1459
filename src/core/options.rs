//! Serializable engine options
//!
//! Lets an application keep its logging setup in a JSON document:
//!
//! ```
//! use mailbox_logger::{EngineOptions, LogConfig};
//!
//! let options = EngineOptions::from_json(
//!     r#"{ "config": "file|console|level", "log_path": "/var/log/app", "poll_interval_ms": 50 }"#,
//! )
//! .unwrap();
//!
//! assert!(options.config.contains(LogConfig::ENABLE_FILE));
//! let engine = options.into_builder().build();
//! assert!(engine.is_enabled());
//! ```

use super::config::LogConfig;
use super::engine::{EngineBuilder, DEFAULT_POLL_INTERVAL};
use super::error::{LoggerError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Raw bits or flag names, e.g. `770` or `"console|level"`.
    #[serde(deserialize_with = "deserialize_config")]
    pub config: LogConfig,
    pub log_path: Option<PathBuf>,
    pub enabled: bool,
    pub poll_interval_ms: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            config: LogConfig::default(),
            log_path: None,
            enabled: true,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl EngineOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: EngineOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(LoggerError::config(
                "EngineOptions",
                "poll_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn into_builder(self) -> EngineBuilder {
        let mut builder = EngineBuilder::new()
            .config(self.config)
            .enabled(self.enabled)
            .poll_interval(Duration::from_millis(self.poll_interval_ms));
        if let Some(path) = self.log_path {
            builder = builder.log_path(path);
        }
        builder
    }
}

fn deserialize_config<'de, D>(deserializer: D) -> std::result::Result<LogConfig, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ConfigRepr {
        Bits(u32),
        Names(String),
    }

    match ConfigRepr::deserialize(deserializer)? {
        ConfigRepr::Bits(bits) => Ok(LogConfig::from_bits(bits)),
        ConfigRepr::Names(names) => names.parse().map_err(serde::de::Error::custom),
    }
}
