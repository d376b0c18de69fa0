use serde::Deserialize;
use serde::Serialize;

use crate::ActionTemplate;

/// Anomaly thresholds and the actions they trigger.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AlertsConfig {
    /// Relative change in switch 0 frequency, in percent, that counts as a rate change
    #[serde(default)]
    pub rate_change_percent: u32,

    /// Action run on a rate change. Rate-change detection is off when absent.
    #[serde(default)]
    pub rate_change: Option<ActionTemplate>,

    /// Seconds beyond the running average before a stuck-On switch 0 is overdue
    #[serde(default)]
    pub overdue_threshold: u64,

    /// Action run once per overdue episode
    #[serde(default)]
    pub overdue: Option<ActionTemplate>,
}
