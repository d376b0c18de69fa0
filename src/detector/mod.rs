//! Per-switch edge detection and primary-switch anomaly checks.

pub mod debounce;
mod overdue;
pub mod rate_change;

pub use debounce::Transition;
pub use overdue::*;
pub use rate_change::RateChange;

#[cfg(test)]
mod debounce_test;
