//! Fakes and fixtures shared by the unit tests.
mod common;
mod fakes;

pub use common::*;
pub use fakes::*;
