use tracing::info;
use tracing::warn;

use crate::config::AlertsConfig;
use crate::config::ConfigSnapshot;
use crate::detector::OverdueDetector;
use crate::flow::DerivedMetrics;
use crate::flow::SumpGeometry;
use crate::registry::SwitchRegistry;
use crate::SumpwatchConfig;

/// All mutable monitor state, owned by the polling loop.
///
/// Every component receives this explicitly; nothing lives in statics.
#[derive(Debug, Clone)]
pub struct MonitorContext {
    pub registry: SwitchRegistry,
    pub geometry: SumpGeometry,
    pub alerts: AlertsConfig,
    pub overdue: OverdueDetector,
}

impl MonitorContext {
    pub fn new(config: &SumpwatchConfig) -> Self {
        Self {
            registry: SwitchRegistry::from_config(config),
            geometry: SumpGeometry::new(&config.sump),
            alerts: config.alerts.clone(),
            overdue: OverdueDetector::new(),
        }
    }

    /// Estimates rendered for the next action, from switch 0's level and frequency.
    pub fn derived_metrics(&self) -> DerivedMetrics {
        let (level, frequency) = self
            .registry
            .primary()
            .map(|s| (s.settings.level, s.frequency()))
            .unwrap_or((0, 0));
        DerivedMetrics::compute(&self.geometry, level, frequency)
    }

    /// Merges a reloaded snapshot. Returns the switch ids whose settings changed.
    pub fn apply(
        &mut self,
        snapshot: &ConfigSnapshot,
    ) -> Vec<u8> {
        let changed = self.registry.apply(snapshot);

        if self.alerts != snapshot.alerts {
            info!("Alert settings reloaded: {:?}", snapshot.alerts);
            self.alerts = snapshot.alerts.clone();
        }
        changed
    }

    /// Logs edits to settings that only take effect on restart.
    pub fn report_fixed_changes(
        &self,
        config: &SumpwatchConfig,
    ) {
        if !self.geometry.matches(&config.sump) {
            warn!("sump geometry changed in config; ignored until restart");
        }

        for cfg in &config.switches {
            match (self.registry.get(cfg.id), cfg.pin) {
                (Some(switch), Some(pin)) if switch.pin() != pin => warn!(
                    "Switch{} pin changed {} -> {}; ignored until restart",
                    cfg.id,
                    switch.pin(),
                    pin
                ),
                (Some(switch), None) => warn!(
                    "Switch{} pin removed from config; still monitoring pin {} until restart",
                    cfg.id,
                    switch.pin()
                ),
                (None, Some(pin)) => warn!(
                    "Switch{} bound to pin {} after startup; ignored until restart",
                    cfg.id, pin
                ),
                _ => {}
            }
        }
    }
}
