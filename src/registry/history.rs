use crate::constants::FREQ_HISTORY;

/// Fixed-capacity FIFO ring of the most recent On→On intervals, in seconds.
///
/// Slots start empty. Once full, each push evicts the oldest interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalHistory {
    slots: [Option<u64>; FREQ_HISTORY],
}

impl IntervalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ring from raw slots, oldest first.
    pub fn from_slots(slots: [Option<u64>; FREQ_HISTORY]) -> Self {
        Self { slots }
    }

    /// Records an interval. A 0-second interval carries no timing and is dropped.
    pub fn push(
        &mut self,
        interval_secs: u64,
    ) {
        if interval_secs == 0 {
            return;
        }
        self.slots.rotate_left(1);
        self.slots[FREQ_HISTORY - 1] = Some(interval_secs);
    }

    /// Running average of the populated slots in whole seconds.
    ///
    /// Returns 0 when nothing has been recorded yet. 0 means "insufficient
    /// history", never a measured interval.
    pub fn frequency(&self) -> u64 {
        let (sum, count) = self
            .recorded()
            .fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            0
        } else {
            sum / count
        }
    }

    /// True once every slot holds an interval.
    pub fn is_full(&self) -> bool {
        self.populated() == FREQ_HISTORY
    }

    pub fn populated(&self) -> usize {
        self.recorded().count()
    }

    /// Non-zero intervals; a `Some(0)` slot counts as empty.
    fn recorded(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().flatten().copied().filter(|&v| v > 0)
    }

    pub fn slots(&self) -> &[Option<u64>; FREQ_HISTORY] {
        &self.slots
    }
}
