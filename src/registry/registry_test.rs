use super::*;
use crate::config::Fingerprint;
use crate::test_utils::sample_config;
use crate::test_utils::switch_config;
use crate::test_utils::PRIMARY_PIN;
use crate::ActionTemplate;

fn registry_with_spare() -> SwitchRegistry {
    let mut config = sample_config();
    config.switches.push(switch_config(1, Some(27), 400));
    config.switches.push(switch_config(5, None, 600));
    SwitchRegistry::from_config(&config)
}

#[test]
fn from_config_should_skip_unbound_switches() {
    let registry = registry_with_spare();

    assert_eq!(registry.ids(), vec![0, 1]);
    assert_eq!(registry.primary().unwrap().pin(), PRIMARY_PIN);
    assert!(registry.get(5).is_none());
    assert!(registry.iter().all(|s| s.state() == SwitchState::Off));
}

#[test]
fn activation_should_record_interval_since_previous_activation() {
    let mut runtime = SwitchRuntime::default();

    runtime.record_activation(1_000);
    assert_eq!(runtime.history.populated(), 0);
    assert_eq!(runtime.last_on_at, Some(1_000));

    runtime.record_release(1_030);
    runtime.record_activation(1_150);

    assert_eq!(runtime.history.frequency(), 150);
    assert_eq!(runtime.state, SwitchState::On);
    assert_eq!(runtime.secs_since_off(1_200), 170);
}

#[test]
fn apply_should_replace_settings_and_keep_runtime() {
    let mut registry = registry_with_spare();
    {
        let primary = registry.get_mut(0).unwrap();
        primary.runtime.record_activation(100);
        primary.runtime.record_release(120);
        primary.runtime.record_activation(250);
        primary.runtime.baseline_frequency = 150;
    }
    let before = registry.primary().unwrap().runtime;

    let mut reloaded = sample_config();
    reloaded.switches[0].level = 300;
    reloaded.switches[0].bounce = 9;
    reloaded.switches[0].off = None;
    reloaded.switches.push(switch_config(1, Some(27), 400));
    let snapshot = ConfigSnapshot::from_config(&reloaded, Fingerprint::of(b"v2"));

    let changed = registry.apply(&snapshot);

    assert_eq!(changed, vec![0]);
    let primary = registry.primary().unwrap();
    assert_eq!(primary.runtime, before);
    assert_eq!(primary.settings.level, 300);
    assert_eq!(primary.settings.bounce_secs, 9);
    assert!(primary.settings.off_action.is_none());
    assert_eq!(
        primary.settings.on_action,
        Some(ActionTemplate::new("echo switch0 on"))
    );
}

#[test]
fn apply_should_ignore_switches_not_bound_at_startup() {
    let mut registry = registry_with_spare();
    let mut reloaded = sample_config();
    reloaded.switches.push(switch_config(7, Some(22), 500));
    let snapshot = ConfigSnapshot::from_config(&reloaded, Fingerprint::of(b"v2"));

    let changed = registry.apply(&snapshot);

    assert!(changed.is_empty());
    assert_eq!(registry.ids(), vec![0, 1]);
}

#[test]
fn apply_should_leave_switches_missing_from_snapshot_untouched() {
    let mut registry = registry_with_spare();
    let before = registry.get(1).unwrap().settings.clone();
    let snapshot = ConfigSnapshot::from_config(&sample_config(), Fingerprint::of(b"v2"));

    registry.apply(&snapshot);

    assert_eq!(registry.get(1).unwrap().settings, before);
}
