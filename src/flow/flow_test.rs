use super::*;
use crate::constants::*;
use crate::test_utils::sample_sump;

fn assert_close(
    actual: f64,
    expected: f64,
) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn geometry_should_compute_capacity_once() {
    let geometry = SumpGeometry::new(&sample_sump());

    assert_close(geometry.cross_section_cm2(), 2042.82);
    assert_close(geometry.capacity(), 155.25);
    assert_close(geometry.cycle_volume(), 22.06);
    assert!(geometry.matches(&sample_sump()));
}

#[test]
fn metrics_should_follow_primary_cycle() {
    let geometry = SumpGeometry::new(&sample_sump());

    let metrics = DerivedMetrics::compute(&geometry, 222, 150);

    assert_close(metrics.volume, 45.35);
    assert_close(metrics.rate, 529.50);
    assert_close(metrics.time_left_secs, 747.22);
    assert_close(metrics.time_left_minutes(), 12.45);
}

#[test]
fn env_should_render_truncated_values() {
    let geometry = SumpGeometry::new(&sample_sump());

    let env = DerivedMetrics::compute(&geometry, 222, 150).to_env("Switch0On");

    assert_eq!(env.get(ENV_VOLUME), Some("45"));
    assert_eq!(env.get(ENV_RATE), Some("529"));
    assert_eq!(env.get(ENV_FREQ), Some("150"));
    assert_eq!(env.get(ENV_FREQ_MINUTES), Some("2"));
    assert_eq!(env.get(ENV_FREQ_FORMATTED), Some("2m 30s"));
    assert_eq!(env.get(ENV_TIME_LEFT), Some("747"));
    assert_eq!(env.get(ENV_TIME_LEFT_MINUTES), Some("12"));
    assert_eq!(env.get(ENV_EVENT), Some("Switch0On"));
    assert_eq!(env.len(), 8);
}

#[test]
fn missing_frequency_should_zero_rate_and_time_left() {
    let geometry = SumpGeometry::new(&sample_sump());

    let metrics = DerivedMetrics::compute(&geometry, 222, 0);

    assert_close(metrics.volume, 45.35);
    assert_eq!(metrics.rate, 0.0);
    assert_eq!(metrics.time_left_secs, 0.0);
    assert_eq!(metrics.to_env("Overdue").get(ENV_FREQ_FORMATTED), Some("0m 0s"));
}

#[test]
fn level_above_depth_should_clamp_time_left() {
    let geometry = SumpGeometry::new(&sample_sump());

    let metrics = DerivedMetrics::compute(&geometry, 900, 150);

    assert_eq!(metrics.time_left_secs, 0.0);
}

#[test]
fn zero_geometry_should_yield_zero_estimates() {
    let geometry = SumpGeometry::new(&crate::config::SumpConfig::default());

    let metrics = DerivedMetrics::compute(&geometry, 0, 150);

    assert_eq!(metrics.volume, 0.0);
    assert_eq!(metrics.rate, 0.0);
    assert_eq!(metrics.time_left_secs, 0.0);
}
