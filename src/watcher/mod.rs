//! Detects config source changes and hot-reloads the reloadable subset.
//!
//! Checks are rate-limited to `config_check_secs`. A failed check never
//! disturbs the running monitor: the last-known-good settings stay in place
//! and the next scheduled check tries again.


use tracing::debug;
use tracing::info;
use tracing::trace;
use tracing::warn;

use crate::config::ConfigSnapshot;
use crate::config::ConfigSource;
use crate::config::Fingerprint;
use crate::metrics::CONFIG_RELOADS;
use crate::monitor::MonitorContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The check interval has not elapsed
    NotDue,
    /// Fingerprint matches the last load
    Unchanged,
    /// New settings applied; lists switches whose settings changed
    Reloaded { changed_switches: Vec<u8> },
    /// Source unreadable or invalid; last-known-good kept
    Failed,
}

pub struct ConfigWatcher<S: ConfigSource> {
    source: S,
    fingerprint: Fingerprint,
    interval_secs: u64,
    last_check: u64,
}

impl<S: ConfigSource> ConfigWatcher<S> {
    /// `fingerprint` is the digest of the config the monitor was started with.
    pub fn new(
        source: S,
        fingerprint: Fingerprint,
        interval_secs: u64,
        now: u64,
    ) -> Self {
        Self {
            source,
            fingerprint,
            interval_secs,
            last_check: now,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Runs [`Self::check`] if at least `interval_secs` have passed since the last one.
    pub fn poll(
        &mut self,
        now: u64,
        ctx: &mut MonitorContext,
    ) -> ReloadOutcome {
        if now.saturating_sub(self.last_check) < self.interval_secs {
            return ReloadOutcome::NotDue;
        }
        self.last_check = now;
        self.check(ctx)
    }

    /// Compares fingerprints and, on change, reparses and merges the new settings.
    pub fn check(
        &mut self,
        ctx: &mut MonitorContext,
    ) -> ReloadOutcome {
        let fingerprint = match self.source.fingerprint() {
            Ok(f) => f,
            Err(e) => {
                warn!("config source unreadable, keeping current settings: {}", e);
                CONFIG_RELOADS.with_label_values(&["unreadable"]).inc();
                return ReloadOutcome::Failed;
            }
        };

        if fingerprint == self.fingerprint {
            trace!("config unchanged");
            return ReloadOutcome::Unchanged;
        }

        info!("Config changed");
        debug!("Old: {}", self.fingerprint);
        debug!("New: {}", fingerprint);

        let config = match self.source.load() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to reload config, keeping current settings: {}", e);
                CONFIG_RELOADS.with_label_values(&["invalid"]).inc();
                return ReloadOutcome::Failed;
            }
        };
        if let Err(e) = config.validate_reloadable() {
            warn!("reloaded config rejected, keeping current settings: {}", e);
            CONFIG_RELOADS.with_label_values(&["invalid"]).inc();
            return ReloadOutcome::Failed;
        }

        ctx.report_fixed_changes(&config);
        let snapshot = ConfigSnapshot::from_config(&config, fingerprint);
        let changed_switches = ctx.apply(&snapshot);
        self.fingerprint = fingerprint;

        CONFIG_RELOADS.with_label_values(&["applied"]).inc();
        ReloadOutcome::Reloaded { changed_switches }
    }
}
