//! Volumetric estimates derived from the sump geometry and switch 0's cycle.
//!
//! Lengths are millimetres, volumes litres, flow litres per hour.

#[cfg(test)]
mod flow_test;

use std::f64::consts::PI;

use crate::action::ActionEnv;
use crate::config::SumpConfig;
use crate::constants::ENV_EVENT;
use crate::constants::ENV_FREQ;
use crate::constants::ENV_FREQ_FORMATTED;
use crate::constants::ENV_FREQ_MINUTES;
use crate::constants::ENV_RATE;
use crate::constants::ENV_TIME_LEFT;
use crate::constants::ENV_TIME_LEFT_MINUTES;
use crate::constants::ENV_VOLUME;

/// Pit dimensions fixed at startup, with capacity computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumpGeometry {
    pub depth: u32,
    pub diameter: u32,
    pub low_water: u32,
    pub high_water: u32,
    capacity: f64,
}

impl SumpGeometry {
    pub fn new(cfg: &SumpConfig) -> Self {
        let mut geometry = Self {
            depth: cfg.depth,
            diameter: cfg.diameter,
            low_water: cfg.low_water,
            high_water: cfg.high_water,
            capacity: 0.0,
        };
        geometry.capacity = geometry.litres_at(cfg.depth);
        geometry
    }

    /// Cross-sectional area of the pit in cm².
    pub fn cross_section_cm2(&self) -> f64 {
        let radius_cm = self.diameter as f64 / 20.0;
        PI * radius_cm * radius_cm
    }

    /// Volume of a column of water `height_mm` tall, in litres.
    pub fn litres_at(
        &self,
        height_mm: u32,
    ) -> f64 {
        (height_mm as f64 / 10.0) * self.cross_section_cm2() / 1000.0
    }

    /// Volume of the full pit.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Volume pumped out per cycle (high water down to low water).
    pub fn cycle_volume(&self) -> f64 {
        self.litres_at(self.high_water.saturating_sub(self.low_water))
    }

    pub fn matches(
        &self,
        cfg: &SumpConfig,
    ) -> bool {
        self.depth == cfg.depth
            && self.diameter == cfg.diameter
            && self.low_water == cfg.low_water
            && self.high_water == cfg.high_water
    }
}

/// Tick-scoped estimates rendered into the action environment.
///
/// Any value that cannot be computed (no frequency yet, zero rate) is 0, which
/// means "insufficient data" rather than a measured zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Litres currently in the pit, from switch 0's level
    pub volume: f64,
    /// Inflow in litres per hour
    pub rate: f64,
    /// Average seconds between switch 0 activations
    pub frequency: u64,
    /// Seconds until the pit overflows at the current rate
    pub time_left_secs: f64,
}

impl DerivedMetrics {
    pub fn compute(
        geometry: &SumpGeometry,
        level_mm: u32,
        frequency: u64,
    ) -> Self {
        let volume = geometry.litres_at(level_mm);

        let rate = if frequency > 0 {
            geometry.cycle_volume() * 3600.0 / frequency as f64
        } else {
            0.0
        };

        let time_left_secs = if rate > 0.0 {
            ((geometry.capacity() - volume) * 3600.0 / rate).max(0.0)
        } else {
            0.0
        };

        Self {
            volume,
            rate,
            frequency,
            time_left_secs,
        }
    }

    pub fn time_left_minutes(&self) -> f64 {
        self.time_left_secs / 60.0
    }

    /// Renders the fixed-name environment handed to actions. `event` becomes `SAEVENT`.
    pub fn to_env(
        &self,
        event: &str,
    ) -> ActionEnv {
        let time_left = self.time_left_secs as u64;

        let mut env = ActionEnv::new();
        env.set(ENV_VOLUME, self.volume as u64);
        env.set(ENV_RATE, self.rate as u64);
        env.set(ENV_FREQ, self.frequency);
        env.set(ENV_FREQ_MINUTES, self.frequency / 60);
        env.set(
            ENV_FREQ_FORMATTED,
            format!("{}m {}s", self.frequency / 60, self.frequency % 60),
        );
        env.set(ENV_TIME_LEFT, time_left);
        env.set(ENV_TIME_LEFT_MINUTES, time_left / 60);
        env.set(ENV_EVENT, event);
        env
    }
}
