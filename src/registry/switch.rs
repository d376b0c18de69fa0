use std::fmt;

use super::IntervalHistory;
use crate::config::SwitchSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    Off,
    On,
}

impl SwitchState {
    pub fn from_level(high: bool) -> Self {
        if high {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }

    pub fn is_on(self) -> bool {
        self == SwitchState::On
    }
}

impl fmt::Display for SwitchState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SwitchState::Off => f.write_str("Off"),
            SwitchState::On => f.write_str("On"),
        }
    }
}

/// Everything the monitor learns about a switch while running.
///
/// Never touched by a config reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchRuntime {
    /// Validated (post-debounce) state
    pub state: SwitchState,
    /// Time of the last accepted ToOn, if any
    pub last_on_at: Option<u64>,
    /// Time of the last accepted ToOff, if any
    pub last_off_at: Option<u64>,
    pub history: IntervalHistory,
    /// Frequency remembered for rate-change comparison; 0 = no baseline yet
    pub baseline_frequency: u64,
}

impl SwitchRuntime {
    /// Records an accepted activation and the interval since the previous one.
    ///
    /// The very first activation only stamps `last_on_at`; there is no
    /// previous activation to measure from. A 0-second interval (same-second
    /// reactivation, clock stepped back) is not recorded.
    pub fn record_activation(
        &mut self,
        now: u64,
    ) {
        if let Some(previous) = self.last_on_at {
            self.history.push(now.saturating_sub(previous));
        }
        self.last_on_at = Some(now);
        self.state = SwitchState::On;
    }

    pub fn record_release(
        &mut self,
        now: u64,
    ) {
        self.last_off_at = Some(now);
        self.state = SwitchState::Off;
    }

    /// Seconds since the last release; unset counts as the epoch.
    pub fn secs_since_off(
        &self,
        now: u64,
    ) -> u64 {
        now.saturating_sub(self.last_off_at.unwrap_or(0))
    }
}

#[derive(Debug, Clone)]
pub struct Switch {
    id: u8,
    pin: u8,
    pub settings: SwitchSettings,
    pub runtime: SwitchRuntime,
}

impl Switch {
    pub fn new(
        id: u8,
        pin: u8,
        settings: SwitchSettings,
    ) -> Self {
        Self {
            id,
            pin,
            settings,
            runtime: SwitchRuntime::default(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }

    pub fn state(&self) -> SwitchState {
        self.runtime.state
    }

    /// Running average seconds between activations; 0 = insufficient history.
    pub fn frequency(&self) -> u64 {
        self.runtime.history.frequency()
    }
}
