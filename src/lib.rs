//! Sump pump health monitor.
//!
//! Samples float switches once per tick, debounces them, tracks how often the
//! primary switch (switch 0) cycles, and launches action scripts on switch
//! transitions, on large flow-rate changes, and when switch 0 stays On for
//! longer than its usual cycle. Configuration is hot-reloaded without
//! disturbing the per-switch runtime history.

pub mod action;
mod config;
pub mod constants;
pub mod detector;
mod errors;
pub mod flow;
pub mod hardware;
pub mod metrics;
pub mod monitor;
pub mod registry;
pub mod utils;
pub mod watcher;

pub use action::ActionDispatcher;
pub use action::ActionEnv;
pub use action::ActionTemplate;
pub use config::*;
pub use errors::*;
pub use hardware::LevelReader;
pub use monitor::MonitorContext;
pub use monitor::SumpMonitor;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
