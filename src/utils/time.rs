use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// return second
///
/// A clock set before the epoch reads as 0 rather than panicking the loop.
pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
