use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollingConfig {
    /// Polling loop cadence (unit: milliseconds)
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Minimum seconds between config source fingerprint checks
    #[serde(default = "default_config_check_secs")]
    pub config_check_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            config_check_secs: default_config_check_secs(),
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(Error::invalid_config("polling.interval_ms must be > 0"));
        }
        if self.config_check_secs == 0 {
            return Err(Error::invalid_config("polling.config_check_secs must be > 0"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_interval_ms() -> u64 {
    1000
}
fn default_config_check_secs() -> u64 {
    180
}
