//! RBAC configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacConfig {
    /// Whether the hosting application wires visibility gates at all;
    /// consoles with gating disabled show every element
    pub enabled: bool,

    /// Role consumers may grant implicitly to authenticated users.
    /// The gate itself never consults it.
    pub default_role: Option<String>,
}

impl RbacConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(enabled) = env::var("BP_RBAC_ENABLED") {
            self.enabled = enabled.parse().unwrap_or(false);
        }
        if let Ok(role) = env::var("BP_RBAC_DEFAULT_ROLE") {
            self.default_role = Some(role);
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RbacConfig::default();
        assert!(!config.enabled);
        assert!(config.default_role.is_none());
        assert!(config.validate().is_ok());
    }
}
