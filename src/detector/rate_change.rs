use crate::registry::SwitchRuntime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateChange {
    /// No interval recorded yet
    NoData,
    /// History not yet full, baseline withheld
    WarmingUp,
    /// First baseline recorded; never reported as a change
    BaselineEstablished { frequency: u64 },
    /// Within tolerance of the baseline
    Steady { ratio: f64 },
    /// Outside tolerance; baseline moved to `current`
    Changed { previous: u64, current: u64 },
}

impl RateChange {
    pub fn should_fire(&self) -> bool {
        matches!(self, RateChange::Changed { .. })
    }
}

/// Compares the primary switch's current frequency with its remembered baseline.
///
/// `threshold_percent` of 20 tolerates ratios in `[0.8, 1.2]`; anything strictly
/// outside moves the baseline and reports [`RateChange::Changed`].
pub fn evaluate(
    runtime: &mut SwitchRuntime,
    threshold_percent: u32,
) -> RateChange {
    let frequency = runtime.history.frequency();
    if frequency == 0 {
        return RateChange::NoData;
    }

    if runtime.baseline_frequency == 0 {
        if !runtime.history.is_full() {
            return RateChange::WarmingUp;
        }
        runtime.baseline_frequency = frequency;
        return RateChange::BaselineEstablished { frequency };
    }

    let ratio = runtime.baseline_frequency as f64 / frequency as f64;
    let tolerance = threshold_percent as f64 / 100.0;
    if ratio > 1.0 + tolerance || ratio < 1.0 - tolerance {
        let previous = runtime.baseline_frequency;
        runtime.baseline_frequency = frequency;
        RateChange::Changed {
            previous,
            current: frequency,
        }
    } else {
        RateChange::Steady { ratio }
    }
}
