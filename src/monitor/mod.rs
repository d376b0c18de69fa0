//! The polling loop.
//!
//! One tick: check switch 0 for an overdue episode, sample every monitored
//! switch in id order and act on validated transitions, then give the config
//! watcher a chance to reload. Nothing in a tick blocks; actions are only
//! enqueued.

mod context;
pub use context::*;


use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::debug;
use tracing::info;
use tracing::trace;
use tracing::warn;

use crate::action::ActionDispatcher;
use crate::action::ActionTemplate;
use crate::config::ConfigSource;
use crate::config::Fingerprint;
use crate::constants::PRIMARY_SWITCH;
use crate::detector::debounce;
use crate::detector::rate_change;
use crate::detector::RateChange;
use crate::detector::Transition;
use crate::hardware::LevelReader;
use crate::metrics::ACTIONS_DISPATCHED;
use crate::metrics::INFLOW_RATE;
use crate::metrics::PRIMARY_FREQUENCY;
use crate::metrics::SWITCH_TRANSITIONS;
use crate::registry::SwitchState;
use crate::utils::time::now_secs;
use crate::watcher::ConfigWatcher;
use crate::watcher::ReloadOutcome;
use crate::Error;
use crate::Result;
use crate::SumpwatchConfig;

pub struct SumpMonitor<R, D, S>
where
    R: LevelReader,
    D: ActionDispatcher,
    S: ConfigSource,
{
    ctx: MonitorContext,
    reader: R,
    dispatcher: D,
    watcher: ConfigWatcher<S>,
    poll_interval: Duration,
}

impl<R, D, S> SumpMonitor<R, D, S>
where
    R: LevelReader,
    D: ActionDispatcher,
    S: ConfigSource,
{
    /// Binds every monitored pin and primes each switch with its current level.
    ///
    /// `config` must already be validated, and `fingerprint` must be the digest
    /// it was loaded from.
    ///
    /// # Errors
    /// `Error::Fatal` without a bound switch 0. Any pin that cannot be bound or
    /// read is fatal too.
    pub fn new(
        config: &SumpwatchConfig,
        fingerprint: Fingerprint,
        source: S,
        mut reader: R,
        dispatcher: D,
        now: u64,
    ) -> Result<Self> {
        let mut ctx = MonitorContext::new(config);
        if ctx.registry.primary().is_none() {
            return Err(Error::Fatal(format!(
                "Switch{PRIMARY_SWITCH} has no pin binding, nothing to monitor"
            )));
        }
        info!("Capacity set to {} Litres", ctx.geometry.capacity() as u64);

        for id in ctx.registry.ids() {
            let Some(switch) = ctx.registry.get_mut(id) else {
                continue;
            };
            reader.bind(switch.pin())?;
            let high = reader.level(switch.pin())?;
            switch.runtime.state = SwitchState::from_level(high);
            info!("Switch{} Initial state: {}", id, switch.state());
        }

        Ok(Self {
            ctx,
            reader,
            dispatcher,
            watcher: ConfigWatcher::new(source, fingerprint, config.polling.config_check_secs, now),
            poll_interval: config.polling.interval(),
        })
    }

    pub fn context(&self) -> &MonitorContext {
        &self.ctx
    }

    pub fn watcher(&self) -> &ConfigWatcher<S> {
        &self.watcher
    }

    /// Polls at the configured cadence until `shutdown` fires or its sender is dropped.
    ///
    /// A tick in progress always completes before the loop exits.
    pub async fn run(
        mut self,
        mut shutdown: watch::Receiver<()>,
    ) -> Result<()> {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Monitoring {} switch(es)", self.ctx.registry.len());
        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => {
                    info!("shutdown signal received.");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    self.tick(now_secs());
                }
            }
        }
    }

    /// Runs one polling pass at time `now` (seconds since the epoch).
    pub fn tick(
        &mut self,
        now: u64,
    ) -> ReloadOutcome {
        self.check_overdue(now);

        for id in self.ctx.registry.ids() {
            self.sample(id, now);
        }

        self.watcher.poll(now, &mut self.ctx)
    }

    fn check_overdue(
        &mut self,
        now: u64,
    ) {
        let threshold = self.ctx.alerts.overdue_threshold;
        let Some(primary) = self.ctx.registry.primary() else {
            return;
        };
        if !self.ctx.overdue.check(primary, threshold, now) {
            return;
        }

        warn!(
            "Switch{} overdue: On for {}s against a {}s average cycle",
            PRIMARY_SWITCH,
            primary.runtime.secs_since_off(now),
            primary.frequency()
        );
        let action = self.ctx.alerts.overdue.clone();
        self.fire(action.as_ref(), "Overdue");
    }

    fn sample(
        &mut self,
        id: u8,
        now: u64,
    ) {
        let Some(switch) = self.ctx.registry.get_mut(id) else {
            return;
        };
        let high = match self.reader.level(switch.pin()) {
            Ok(high) => high,
            Err(e) => {
                warn!("Switch{} skipped this tick: {}", id, e);
                return;
            }
        };

        match debounce::observe(switch, high, now) {
            Transition::NoTransition => {}
            Transition::ToOn => self.on_activated(id),
            Transition::ToOff => self.on_released(id),
        }
    }

    fn on_activated(
        &mut self,
        id: u8,
    ) {
        info!("Switch{} On", id);
        SWITCH_TRANSITIONS
            .with_label_values(&[&id.to_string(), "on"])
            .inc();

        let action = self.ctx.registry.get(id).and_then(|s| s.settings.on_action.clone());
        self.fire(action.as_ref(), &format!("Switch{id}On"));

        if id == PRIMARY_SWITCH {
            if let Some(primary) = self.ctx.registry.primary() {
                PRIMARY_FREQUENCY.set(primary.frequency() as f64);
            }
            self.check_rate_change();
        }
    }

    fn on_released(
        &mut self,
        id: u8,
    ) {
        info!("Switch{} Off", id);
        SWITCH_TRANSITIONS
            .with_label_values(&[&id.to_string(), "off"])
            .inc();

        if id == PRIMARY_SWITCH {
            self.ctx.overdue.reset();
        }

        let action = self.ctx.registry.get(id).and_then(|s| s.settings.off_action.clone());
        self.fire(action.as_ref(), &format!("Switch{id}Off"));
    }

    fn check_rate_change(&mut self) {
        let Some(action) = self.ctx.alerts.rate_change.clone() else {
            return;
        };
        let percent = self.ctx.alerts.rate_change_percent;
        let Some(primary) = self.ctx.registry.get_mut(PRIMARY_SWITCH) else {
            return;
        };

        match rate_change::evaluate(&mut primary.runtime, percent) {
            RateChange::BaselineEstablished { frequency } => {
                info!("Rate baseline established at {}s between activations", frequency);
            }
            RateChange::Changed { previous, current } => {
                info!("Rate changed: {}s -> {}s between activations", previous, current);
                self.fire(Some(&action), "RateChange");
            }
            other => debug!("rate check: {:?}", other),
        }
    }

    fn fire(
        &self,
        action: Option<&ActionTemplate>,
        event: &str,
    ) {
        let Some(action) = action else {
            trace!("no action configured for {}", event);
            return;
        };

        let metrics = self.ctx.derived_metrics();
        INFLOW_RATE.set(metrics.rate);
        ACTIONS_DISPATCHED.with_label_values(&[event]).inc();

        self.dispatcher.dispatch(action, metrics.to_env(event));
    }
}
