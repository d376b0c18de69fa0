//! Where the monitor's configuration comes from.
//!
//! The watcher only needs two things from a source: a cheap digest to decide
//! whether anything changed, and a full parse when it did.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use sha2::Digest;
use sha2::Sha256;

use super::SumpwatchConfig;
use crate::Result;

/// SHA-256 digest of the raw config source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(pub [u8; 32]);

impl Fingerprint {
    pub fn of(bytes: &[u8]) -> Self {
        Fingerprint(Sha256::digest(bytes).into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

#[cfg_attr(test, automock)]
pub trait ConfigSource: Send + 'static {
    /// Digest of the source as it is right now.
    fn fingerprint(&self) -> Result<Fingerprint>;

    /// Full parse of the source. Not validated.
    fn load(&self) -> Result<SumpwatchConfig>;
}

/// A TOML file on disk, with `SUMP__*` environment overrides applied on load.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileConfigSource {
    fn fingerprint(&self) -> Result<Fingerprint> {
        let bytes = std::fs::read(&self.path)?;
        Ok(Fingerprint::of(&bytes))
    }

    fn load(&self) -> Result<SumpwatchConfig> {
        SumpwatchConfig::load(&self.path)
    }
}
