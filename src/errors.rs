//! Sump Monitor Error Hierarchy
//!
//! Startup failures (configuration, pin binding, GPIO export) are fatal and
//! surface through [`Error`]. Runtime failures are logged by the polling loop
//! and never stop it.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration parse or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Digital input failures (export, direction, level read)
    #[error(transparent)]
    Hardware(#[from] HardwareError),

    /// Config source or log file I/O
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unrecoverable failures requiring process termination
    #[error("Fatal error: {0}")]
    Fatal(String),

    #[error("{0}")]
    SignalSenderClosed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HardwareError {
    /// Exporting the pin or configuring it as input failed
    #[error("Failed to export GPIO pin {pin}: {source}")]
    Export {
        pin: u8,
        #[source]
        source: std::io::Error,
    },

    /// Reading the pin level failed
    #[error("Failed to read GPIO pin {pin}: {source}")]
    Read {
        pin: u8,
        #[source]
        source: std::io::Error,
    },

    /// The value file held something other than a level
    #[error("GPIO pin {pin} reported unexpected value {value:?}")]
    InvalidLevel { pin: u8, value: String },
}

impl Error {
    /// Builds a validation failure in the same shape the `config` crate reports.
    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Error::Config(ConfigError::Message(msg.into()))
    }
}
