use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Sump pit dimensions, in millimetres.
///
/// Read once at startup. Later edits to this section are ignored until restart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct SumpConfig {
    /// Pit depth from the bottom to the overflow point
    #[serde(default)]
    pub depth: u32,

    /// Inside diameter of the pit
    #[serde(default)]
    pub diameter: u32,

    /// Level the pump draws the water down to
    #[serde(default)]
    pub low_water: u32,

    /// Level at which the pump engages
    #[serde(default)]
    pub high_water: u32,
}

impl SumpConfig {
    /// Validates pit geometry
    /// # Errors
    /// Returns `Error::Config` when the water marks are inverted or exceed the pit depth
    pub fn validate(&self) -> Result<()> {
        if self.high_water < self.low_water {
            return Err(Error::invalid_config(format!(
                "sump.high_water ({}) must not be below sump.low_water ({})",
                self.high_water, self.low_water
            )));
        }

        if self.depth > 0 && self.high_water > self.depth {
            return Err(Error::invalid_config(format!(
                "sump.high_water ({}) exceeds sump.depth ({})",
                self.high_water, self.depth
            )));
        }

        Ok(())
    }
}
