//! Logging initialization
//!
//! Buildpane logs through the standard `log` facade (`info!`, `warn!`,
//! `debug!`) with an `env_logger` backend. Call [`init_logging`] once at
//! application startup; repeated calls are safe no-ops.

use crate::config::LoggingConfig;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger from configuration
///
/// Safe to call multiple times; only the first call takes effect.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(config.level_filter());
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        // Another logger may already be installed (tests, host application)
        let _ = builder.try_init();
    });
    Ok(())
}
