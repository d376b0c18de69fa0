use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::MAX_SWITCH_ID;
use crate::constants::PRIMARY_SWITCH;
use crate::ActionTemplate;
use crate::Error;
use crate::Result;

/// One float switch entry (`[[switches]]`).
///
/// A switch without a `pin` is accepted but never monitored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Switch index, 0..=99
    pub id: u8,

    /// Activation depth in millimetres from the pit floor
    ///
    /// Only switch 0's level feeds the volume estimate.
    #[serde(default)]
    pub level: u32,

    /// GPIO pin the switch is wired to; fixed at startup
    #[serde(default)]
    pub pin: Option<u8>,

    /// Minimum seconds since the last Off before a new transition is accepted
    ///
    /// Default: `default_bounce_secs()` (5)
    #[serde(default = "default_bounce_secs")]
    pub bounce: u64,

    /// Action run when the switch turns on
    #[serde(default)]
    pub on: Option<ActionTemplate>,

    /// Action run when the switch turns off
    #[serde(default)]
    pub off: Option<ActionTemplate>,
}

impl SwitchConfig {
    pub fn is_bound(&self) -> bool {
        self.pin.is_some()
    }
}

/// Checks ids only. Safe to run on a reloaded file whose pin section is ignored.
pub(super) fn validate_ids(switches: &[SwitchConfig]) -> Result<()> {
    let mut ids = HashSet::new();
    for switch in switches {
        if switch.id > MAX_SWITCH_ID {
            return Err(Error::invalid_config(format!(
                "switch id {} out of range (0..={MAX_SWITCH_ID})",
                switch.id
            )));
        }
        if !ids.insert(switch.id) {
            return Err(Error::invalid_config(format!("Duplicate switch id {}", switch.id)));
        }
    }
    Ok(())
}

/// Startup validation: ids, pin bindings, and the primary switch.
pub(super) fn validate_bindings(switches: &[SwitchConfig]) -> Result<()> {
    validate_ids(switches)?;

    let mut pins = HashSet::new();
    for switch in switches {
        let Some(pin) = switch.pin else {
            continue;
        };
        if pin == 0 {
            return Err(Error::invalid_config(format!(
                "Switch{} GPIO pin invalid: 0",
                switch.id
            )));
        }
        if !pins.insert(pin) {
            return Err(Error::invalid_config(format!(
                "GPIO pin {pin} is bound to more than one switch (Switch{})",
                switch.id
            )));
        }
    }

    let primary_bound = switches
        .iter()
        .any(|s| s.id == PRIMARY_SWITCH && s.is_bound());
    if !primary_bound {
        return Err(Error::invalid_config(format!(
            "Switch{PRIMARY_SWITCH} is not configured with a pin"
        )));
    }

    Ok(())
}

fn default_bounce_secs() -> u64 {
    5
}
