use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use super::LevelReader;
use crate::constants::DEFAULT_SYSFS_GPIO_ROOT;
use crate::HardwareError;
use crate::Result;

/// Linux sysfs GPIO (`/sys/class/gpio`) input reader.
#[derive(Debug, Clone)]
pub struct SysfsGpio {
    root: PathBuf,
}

impl Default for SysfsGpio {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_GPIO_ROOT)
    }
}

impl SysfsGpio {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn pin_dir(
        &self,
        pin: u8,
    ) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }
}

impl LevelReader for SysfsGpio {
    fn bind(
        &mut self,
        pin: u8,
    ) -> Result<()> {
        let pin_dir = self.pin_dir(pin);
        if !pin_dir.exists() {
            debug!("exporting GPIO pin {}", pin);
            fs::write(self.root.join("export"), pin.to_string())
                .map_err(|source| HardwareError::Export { pin, source })?;
        }

        fs::write(pin_dir.join("direction"), "in")
            .map_err(|source| HardwareError::Export { pin, source })?;
        Ok(())
    }

    fn level(
        &self,
        pin: u8,
    ) -> Result<bool> {
        let raw = fs::read_to_string(self.pin_dir(pin).join("value"))
            .map_err(|source| HardwareError::Read { pin, source })?;

        match raw.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(HardwareError::InvalidLevel {
                pin,
                value: other.to_string(),
            }
            .into()),
        }
    }
}
