use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log file used when not running in the foreground
    ///
    /// Default: `default_log_file()` (/var/log/sumpwatch.log)
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(Error::invalid_config("logging.log_file cannot be empty"));
        }
        Ok(())
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("/var/log/sumpwatch.log")
}
fn default_level() -> String {
    "info".to_string()
}
