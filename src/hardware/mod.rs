//! Digital input access for float switches.
//!
//! The monitor only needs "is this pin high right now". Everything about how
//! that is answered lives behind [`LevelReader`].

mod sysfs;
pub use sysfs::*;


#[cfg(test)]
use mockall::automock;

use crate::Result;

#[cfg_attr(test, automock)]
pub trait LevelReader: Send + 'static {
    /// Prepares `pin` as an input. Called once per monitored switch at startup.
    fn bind(
        &mut self,
        pin: u8,
    ) -> Result<()>;

    /// Samples the current level of `pin`; `true` means the switch is closed (high).
    fn level(
        &self,
        pin: u8,
    ) -> Result<bool>;
}
