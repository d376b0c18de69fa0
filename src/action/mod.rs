//! Fire-and-forget action dispatch.
//!
//! The polling loop only ever enqueues: an [`ActionDispatcher`] must return
//! immediately, and nothing about the action's outcome flows back to the loop.

mod shell;
pub use shell::*;


use std::collections::BTreeMap;
use std::fmt;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde::Serialize;

/// An opaque command line, run through the shell when its event fires.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTemplate(String);

impl ActionTemplate {
    pub fn new(command: impl Into<String>) -> Self {
        ActionTemplate(command.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActionTemplate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for ActionTemplate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named values exported to an action's process environment.
///
/// Captured by value at dispatch time; the running action never sees later ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionEnv(BTreeMap<&'static str, String>);

impl ActionEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        name: &'static str,
        value: impl ToString,
    ) {
        self.0.insert(name, value.to_string());
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg_attr(test, automock)]
pub trait ActionDispatcher: Send + Sync + 'static {
    /// Hands the action off for execution. Must not block or wait for completion.
    fn dispatch(
        &self,
        action: &ActionTemplate,
        env: ActionEnv,
    );
}
