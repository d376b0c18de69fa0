use std::collections::HashMap;
use std::collections::HashSet;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;

use crate::action::ActionDispatcher;
use crate::action::ActionEnv;
use crate::constants::ENV_EVENT;
use crate::hardware::LevelReader;
use crate::ActionTemplate;
use crate::HardwareError;
use crate::Result;

/// In-memory pins. Clones share state, so a test keeps one handle to drive
/// levels while the monitor owns another.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLevels {
    levels: Arc<Mutex<HashMap<u8, bool>>>,
    failing: Arc<Mutex<HashSet<u8>>>,
    bound: Arc<Mutex<Vec<u8>>>,
}

impl ScriptedLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &self,
        pin: u8,
        high: bool,
    ) {
        self.levels.lock().unwrap().insert(pin, high);
    }

    /// Makes every read of `pin` fail until [`Self::recover`] is called.
    pub fn fail(
        &self,
        pin: u8,
    ) {
        self.failing.lock().unwrap().insert(pin);
    }

    pub fn recover(
        &self,
        pin: u8,
    ) {
        self.failing.lock().unwrap().remove(&pin);
    }

    pub fn bound_pins(&self) -> Vec<u8> {
        self.bound.lock().unwrap().clone()
    }
}

impl LevelReader for ScriptedLevels {
    fn bind(
        &mut self,
        pin: u8,
    ) -> Result<()> {
        self.bound.lock().unwrap().push(pin);
        Ok(())
    }

    fn level(
        &self,
        pin: u8,
    ) -> Result<bool> {
        if self.failing.lock().unwrap().contains(&pin) {
            return Err(HardwareError::Read {
                pin,
                source: io::Error::new(io::ErrorKind::Other, "scripted failure"),
            }
            .into());
        }
        Ok(self.levels.lock().unwrap().get(&pin).copied().unwrap_or(false))
    }
}

/// Keeps every dispatched action in order instead of running it.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<(ActionTemplate, ActionEnv)>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(ActionTemplate, ActionEnv)> {
        self.calls.lock().unwrap().clone()
    }

    /// `SAEVENT` of every dispatch so far.
    pub fn events(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, env)| env.get(ENV_EVENT).unwrap_or_default().to_string())
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(
        &self,
        action: &ActionTemplate,
        env: ActionEnv,
    ) {
        self.calls.lock().unwrap().push((action.clone(), env));
    }
}
