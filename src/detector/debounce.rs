use tracing::trace;

use crate::registry::Switch;
use crate::registry::SwitchState;

/// Outcome of feeding one raw sample through the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    NoTransition,
    ToOn,
    ToOff,
}

/// Converts a raw level sample into a validated transition.
///
/// A change is accepted only once `bounce_secs` have passed since the switch
/// last went Off. The gate is measured from the last Off for both directions,
/// so an On→Off change right after a recent Off is held back too. Rejected
/// samples leave the switch untouched.
pub fn observe(
    switch: &mut Switch,
    high: bool,
    now: u64,
) -> Transition {
    let observed = SwitchState::from_level(high);
    if observed == switch.runtime.state {
        return Transition::NoTransition;
    }

    if let Some(last_off) = switch.runtime.last_off_at {
        if now.saturating_sub(last_off) < switch.settings.bounce_secs {
            trace!(
                "Switch{} bounce to {} ignored ({}s since Off)",
                switch.id(),
                observed,
                now.saturating_sub(last_off)
            );
            return Transition::NoTransition;
        }
    }

    match observed {
        SwitchState::On => {
            switch.runtime.record_activation(now);
            Transition::ToOn
        }
        SwitchState::Off => {
            switch.runtime.record_release(now);
            Transition::ToOff
        }
    }
}
