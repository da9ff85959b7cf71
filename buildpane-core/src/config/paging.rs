//! Pagination configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used by views that do not override it
    pub default_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self { default_page_size: crate::pager::DEFAULT_PAGE_SIZE }
    }
}

impl PagingConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(size) = env::var("BP_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                self.default_page_size = size;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            bail!("paging.default_page_size must be at least 1");
        }
        Ok(())
    }
}
