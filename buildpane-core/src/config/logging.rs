//! Logging configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug or trace
    pub level: String,

    /// Whether log lines carry timestamps
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), timestamps: true }
    }
}

impl LoggingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("BP_LOG_LEVEL") {
            self.level = level;
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Map the configured level onto the `log` crate's filter
    ///
    /// Unknown levels fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(config.timestamps);
    }

    #[test]
    fn test_level_filter_mapping() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        config.level = "DEBUG".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        config.level = "bogus".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
