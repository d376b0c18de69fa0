use crate::config::AlertsConfig;
use crate::config::SumpConfig;
use crate::config::SwitchConfig;
use crate::ActionTemplate;
use crate::SumpwatchConfig;

pub const PRIMARY_PIN: u8 = 17;

static LOGGER_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

pub fn enable_logger() {
    *LOGGER_INIT;
    println!("setup logger for unit test.");
}

/// 510 mm pit, 760 mm deep, pumping from 222 mm down to 114 mm.
pub fn sample_sump() -> SumpConfig {
    SumpConfig {
        depth: 760,
        diameter: 510,
        low_water: 114,
        high_water: 222,
    }
}

pub fn switch_config(
    id: u8,
    pin: Option<u8>,
    level: u32,
) -> SwitchConfig {
    SwitchConfig {
        id,
        level,
        pin,
        bounce: 5,
        on: Some(ActionTemplate::new(format!("echo switch{id} on"))),
        off: Some(ActionTemplate::new(format!("echo switch{id} off"))),
    }
}

/// Switch 0 on [`PRIMARY_PIN`] with both alert actions configured.
pub fn sample_config() -> SumpwatchConfig {
    SumpwatchConfig {
        sump: sample_sump(),
        alerts: AlertsConfig {
            rate_change_percent: 20,
            rate_change: Some(ActionTemplate::new("notify rate")),
            overdue_threshold: 60,
            overdue: Some(ActionTemplate::new("notify overdue")),
        },
        switches: vec![switch_config(0, Some(PRIMARY_PIN), 222)],
        ..Default::default()
    }
}
