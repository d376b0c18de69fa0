use crate::registry::Switch;

/// Tracks whether the current On-episode of the primary switch has already
/// been reported as overdue.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverdueDetector {
    notified: bool,
}

impl OverdueDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once per On-episode, when the switch has been On
    /// for at least its average cycle plus `threshold_secs`.
    ///
    /// Elapsed time is measured from the last Off, matching the debounce gate.
    pub fn check(
        &mut self,
        switch: &Switch,
        threshold_secs: u64,
        now: u64,
    ) -> bool {
        if self.notified || !switch.state().is_on() {
            return false;
        }

        let frequency = switch.frequency();
        if frequency == 0 {
            return false;
        }

        if switch.runtime.secs_since_off(now) >= frequency + threshold_secs {
            self.notified = true;
            return true;
        }
        false
    }

    /// Called on the primary switch's ToOff; re-arms the detector.
    pub fn reset(&mut self) {
        self.notified = false;
    }

    pub fn is_notified(&self) -> bool {
        self.notified
    }
}
