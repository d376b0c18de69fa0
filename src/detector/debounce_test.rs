use super::debounce::observe;
use super::*;
use crate::config::SwitchSettings;
use crate::registry::Switch;
use crate::registry::SwitchState;

fn switch(bounce_secs: u64) -> Switch {
    Switch::new(
        0,
        17,
        SwitchSettings {
            level: 222,
            bounce_secs,
            on_action: None,
            off_action: None,
        },
    )
}

#[test]
fn unchanged_level_should_not_transition() {
    let mut sw = switch(5);

    assert_eq!(observe(&mut sw, false, 100), Transition::NoTransition);
    assert_eq!(sw.runtime.last_on_at, None);
}

#[test]
fn first_activation_should_be_accepted_without_prior_off() {
    let mut sw = switch(5);

    assert_eq!(observe(&mut sw, true, 100), Transition::ToOn);
    assert_eq!(sw.state(), SwitchState::On);
    assert_eq!(sw.runtime.last_on_at, Some(100));
    assert_eq!(sw.frequency(), 0);
}

#[test]
fn reactivation_within_bounce_of_last_off_should_be_rejected() {
    let mut sw = switch(5);
    observe(&mut sw, true, 100);
    assert_eq!(observe(&mut sw, false, 130), Transition::ToOff);

    assert_eq!(observe(&mut sw, true, 134), Transition::NoTransition);
    assert_eq!(sw.state(), SwitchState::Off);
    assert_eq!(sw.runtime.last_on_at, Some(100));

    assert_eq!(observe(&mut sw, true, 135), Transition::ToOn);
    assert_eq!(sw.frequency(), 35);
}

#[test]
fn release_is_gated_on_last_off_too() {
    let mut sw = switch(5);
    observe(&mut sw, true, 100);
    observe(&mut sw, false, 130);
    observe(&mut sw, true, 140);

    // On since 140, but this sample is only 14s after the last Off.
    sw.settings.bounce_secs = 15;
    assert_eq!(observe(&mut sw, false, 144), Transition::NoTransition);
    assert_eq!(sw.state(), SwitchState::On);

    assert_eq!(observe(&mut sw, false, 145), Transition::ToOff);
    assert_eq!(sw.runtime.last_off_at, Some(145));
}

#[test]
fn zero_bounce_should_accept_every_change() {
    let mut sw = switch(0);

    assert_eq!(observe(&mut sw, true, 10), Transition::ToOn);
    assert_eq!(observe(&mut sw, false, 10), Transition::ToOff);
    assert_eq!(observe(&mut sw, true, 10), Transition::ToOn);
}

#[test]
fn same_second_reactivation_should_not_skew_frequency() {
    let mut sw = switch(0);
    sw.runtime.history = crate::registry::IntervalHistory::from_slots([None, None, None, Some(100)]);
    sw.runtime.state = SwitchState::On;
    sw.runtime.last_on_at = Some(1_000);

    assert_eq!(observe(&mut sw, false, 1_000), Transition::ToOff);
    assert_eq!(observe(&mut sw, true, 1_000), Transition::ToOn);

    assert_eq!(sw.frequency(), 100);
    assert_eq!(sw.runtime.history.populated(), 1);
}
