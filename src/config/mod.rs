//! Configuration management for the sump monitor.
//!
//! Provides hierarchical configuration loading with priority:
//! 1. Default values (serde `default_*` helpers)
//! 2. TOML config file
//! 3. Environment variables with `SUMP__` prefix (highest priority)
//!
//! Geometry and pin bindings are consumed once at startup. Everything in
//! [`ConfigSnapshot`] may be reloaded while the monitor runs.

mod alerts;
mod logging;
mod monitoring;
mod polling;
mod snapshot;
mod source;
mod sump;
mod switches;
pub use alerts::*;
pub use logging::*;
pub use monitoring::*;
pub use polling::*;
pub use snapshot::*;
pub use source::*;
pub use sump::*;
pub use switches::*;

#[cfg(test)]
mod source_test;

use std::path::Path;

use config::Config;
use config::Environment;
use config::File;
use config::FileFormat;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::CONFIG_ENV_PREFIX;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SumpwatchConfig {
    /// Pit geometry (startup only)
    #[serde(default)]
    pub sump: SumpConfig,
    /// Rate-change and overdue thresholds and their actions
    #[serde(default)]
    pub alerts: AlertsConfig,
    /// Float switch definitions
    #[serde(default)]
    pub switches: Vec<SwitchConfig>,
    /// Loop cadence and config check interval
    #[serde(default)]
    pub polling: PollingConfig,
    /// Log destination and filter
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Prometheus exporter
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

impl SumpwatchConfig {
    /// Loads configuration from the TOML file at `path` without validation.
    ///
    /// Environment variables such as `SUMP__ALERTS__OVERDUE_THRESHOLD=300`
    /// override values from the file.
    ///
    /// # Errors
    /// Fails when the file is missing, unreadable, or not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Validates everything needed to start monitoring and returns the validated instance.
    ///
    /// # Errors
    /// - Switch 0 missing or without a pin
    /// - Pin 0, or a pin shared by two switches
    /// - Switch ids out of range or duplicated
    /// - Inverted water marks, zero polling intervals
    pub fn validate(self) -> Result<Self> {
        self.sump.validate()?;
        validate_bindings(&self.switches)?;
        self.polling.validate()?;
        self.logging.validate()?;
        self.monitoring.validate()?;
        Ok(self)
    }

    /// Validation for a runtime reload: only the hot-reloadable subset must be sound.
    pub fn validate_reloadable(&self) -> Result<()> {
        validate_ids(&self.switches)
    }

    pub fn switch(
        &self,
        id: u8,
    ) -> Option<&SwitchConfig> {
        self.switches.iter().find(|s| s.id == id)
    }
}
