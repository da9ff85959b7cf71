//! Configuration system for Buildpane
//!
//! Per-concern configuration structs with a clear supersedence hierarchy.
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment variables** (`BP_*`)
//! 2. **Config file** (config.toml)
//! 3. **Defaults**
//!
//! # Example
//!
//! ```rust,ignore
//! use buildpane_core::config::BuildpaneConfig;
//!
//! // Load with full supersedence
//! let config = BuildpaneConfig::load()?;
//!
//! // Or load from a specific file
//! let config = BuildpaneConfig::from_file("config.toml")?;
//! ```

pub mod logging;
pub mod paging;
pub mod rbac;

pub use logging::LoggingConfig;
pub use paging::PagingConfig;
pub use rbac::RbacConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete Buildpane configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildpaneConfig {
    pub paging: PagingConfig,
    pub rbac: RbacConfig,
    pub logging: LoggingConfig,
}

impl BuildpaneConfig {
    /// Load configuration with the full supersedence chain
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file, then apply env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    /// Merge another config into this one (other takes priority)
    pub fn merge(&mut self, other: Self) {
        self.paging.merge(other.paging);
        self.rbac.merge(other.rbac);
        self.logging.merge(other.logging);
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.paging.apply_env_vars();
        self.rbac.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.paging.validate()?;
        self.rbac.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
