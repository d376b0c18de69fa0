//! Runtime state of every monitored float switch.
//!
//! A sparse map keyed by switch id. Absence of an id means the switch is not
//! monitored; only switches bound to a pin at startup are ever inserted.

mod history;
mod switch;
pub use history::*;
pub use switch::*;

#[cfg(test)]
mod registry_test;

use std::collections::btree_map;
use std::collections::BTreeMap;

use tracing::debug;
use tracing::info;

use crate::config::ConfigSnapshot;
use crate::config::SwitchSettings;
use crate::constants::PRIMARY_SWITCH;
use crate::SumpwatchConfig;

#[derive(Debug, Clone, Default)]
pub struct SwitchRegistry {
    switches: BTreeMap<u8, Switch>,
}

impl SwitchRegistry {
    /// Registers every switch with a pin binding. Unbound entries are skipped.
    pub fn from_config(config: &SumpwatchConfig) -> Self {
        let mut switches = BTreeMap::new();
        for cfg in &config.switches {
            match cfg.pin {
                Some(pin) => {
                    debug!("Switch{} bound to pin {}", cfg.id, pin);
                    switches.insert(cfg.id, Switch::new(cfg.id, pin, SwitchSettings::from(cfg)));
                }
                None => debug!("Switch{} has no pin, not monitored", cfg.id),
            }
        }
        Self { switches }
    }

    pub fn get(
        &self,
        id: u8,
    ) -> Option<&Switch> {
        self.switches.get(&id)
    }

    pub fn get_mut(
        &mut self,
        id: u8,
    ) -> Option<&mut Switch> {
        self.switches.get_mut(&id)
    }

    pub fn primary(&self) -> Option<&Switch> {
        self.get(PRIMARY_SWITCH)
    }

    /// Monitored switch ids in ascending order.
    pub fn ids(&self) -> Vec<u8> {
        self.switches.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Values<'_, u8, Switch> {
        self.switches.values()
    }

    pub fn len(&self) -> usize {
        self.switches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Overwrites the hot-reloadable settings of each monitored switch named in
    /// `snapshot`. Runtime state is left exactly as it was.
    ///
    /// Returns the ids whose settings changed.
    pub fn apply(
        &mut self,
        snapshot: &ConfigSnapshot,
    ) -> Vec<u8> {
        let mut changed = Vec::new();
        for (id, settings) in &snapshot.switches {
            let Some(switch) = self.switches.get_mut(id) else {
                debug!("Switch{} was not bound at startup, ignoring its settings", id);
                continue;
            };
            if switch.settings != *settings {
                info!("Switch{} settings reloaded: {:?}", id, settings);
                switch.settings = settings.clone();
                changed.push(*id);
            }
        }
        changed
    }
}
