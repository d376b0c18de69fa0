use std::collections::BTreeMap;

use super::AlertsConfig;
use super::Fingerprint;
use super::SumpwatchConfig;
use super::SwitchConfig;
use crate::ActionTemplate;

/// Per-switch parameters that may change while the monitor runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchSettings {
    pub level: u32,
    pub bounce_secs: u64,
    pub on_action: Option<ActionTemplate>,
    pub off_action: Option<ActionTemplate>,
}

impl From<&SwitchConfig> for SwitchSettings {
    fn from(cfg: &SwitchConfig) -> Self {
        Self {
            level: cfg.level,
            bounce_secs: cfg.bounce,
            on_action: cfg.on.clone(),
            off_action: cfg.off.clone(),
        }
    }
}

/// The hot-reloadable subset of a parsed configuration.
///
/// Geometry and pin bindings are not here; they are fixed at startup.
#[derive(Debug, Clone)]
pub struct ConfigSnapshot {
    pub switches: BTreeMap<u8, SwitchSettings>,
    pub alerts: AlertsConfig,
    pub fingerprint: Fingerprint,
}

impl ConfigSnapshot {
    pub fn from_config(
        config: &SumpwatchConfig,
        fingerprint: Fingerprint,
    ) -> Self {
        let switches = config
            .switches
            .iter()
            .map(|s| (s.id, SwitchSettings::from(s)))
            .collect();

        Self {
            switches,
            alerts: config.alerts.clone(),
            fingerprint,
        }
    }
}
