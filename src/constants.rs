// -
// Switch registry

/// Number of On→On intervals kept per switch for the running average
pub const FREQ_HISTORY: usize = 4;

/// Highest switch id accepted from configuration
pub const MAX_SWITCH_ID: u8 = 99;

/// The primary switch; the only one feeding frequency, rate and overdue logic
pub const PRIMARY_SWITCH: u8 = 0;

// -
// Action environment names, fixed for compatibility with existing scripts

pub const ENV_VOLUME: &str = "SAVOLUME";
pub const ENV_RATE: &str = "SARATE";
pub const ENV_FREQ: &str = "SAFREQ";
pub const ENV_FREQ_MINUTES: &str = "SAFREQM";
pub const ENV_FREQ_FORMATTED: &str = "SAFREQF";
pub const ENV_TIME_LEFT: &str = "SATIMELEFT";
pub const ENV_TIME_LEFT_MINUTES: &str = "SATIMELEFTM";
pub const ENV_EVENT: &str = "SAEVENT";

// -
// Defaults

pub const DEFAULT_CONFIG_PATH: &str = "/etc/sumpwatch.toml";
pub(crate) const CONFIG_ENV_PREFIX: &str = "SUMP";
pub(crate) const DEFAULT_SHELL: &str = "/bin/sh";
pub(crate) const DEFAULT_SYSFS_GPIO_ROOT: &str = "/sys/class/gpio";
