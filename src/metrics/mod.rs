//! Prometheus counters and gauges for the polling loop, served on `/metrics`.


use std::net::SocketAddr;

use lazy_static::lazy_static;
use prometheus::Gauge;
use prometheus::IntCounterVec;
use prometheus::Opts;
use prometheus::Registry;
use tokio::sync::watch;
use tracing::error;
use tracing::info;
use warp::Filter;
use warp::Rejection;
use warp::Reply;

lazy_static! {
    pub static ref SWITCH_TRANSITIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("switch_transitions_total", "Accepted (debounced) switch transitions"),
        &["switch", "direction"]
    )
    .expect("metric can not be created");

    pub static ref ACTIONS_DISPATCHED: IntCounterVec = IntCounterVec::new(
        Opts::new("actions_dispatched_total", "Actions handed to the executor"),
        &["event"]
    )
    .expect("metric can not be created");

    pub static ref CONFIG_RELOADS: IntCounterVec = IntCounterVec::new(
        Opts::new("config_reloads_total", "Config change checks that found a new fingerprint"),
        &["outcome"]
    )
    .expect("metric can not be created");

    pub static ref PRIMARY_FREQUENCY: Gauge = Gauge::new(
        "switch0_frequency_seconds",
        "Running average seconds between switch 0 activations (0 = insufficient history)"
    )
    .expect("metric can not be created");

    pub static ref INFLOW_RATE: Gauge = Gauge::new(
        "sump_inflow_litres_per_hour",
        "Estimated inflow at the last action dispatch"
    )
    .expect("metric can not be created");

    pub static ref REGISTRY: Registry = Registry::new();
}

pub fn register_custom_metrics(registry: &Registry) -> prometheus::Result<()> {
    registry.register(Box::new(SWITCH_TRANSITIONS.clone()))?;
    registry.register(Box::new(ACTIONS_DISPATCHED.clone()))?;
    registry.register(Box::new(CONFIG_RELOADS.clone()))?;
    registry.register(Box::new(PRIMARY_FREQUENCY.clone()))?;
    registry.register(Box::new(INFLOW_RATE.clone()))?;
    Ok(())
}

/// Serves `/metrics` on `addr` until `shutdown_signal` fires.
pub async fn start_server(
    addr: SocketAddr,
    mut shutdown_signal: watch::Receiver<()>,
) {
    if let Err(e) = register_custom_metrics(&REGISTRY) {
        error!("failed to register metrics: {:?}", e);
        return;
    }

    let metrics_route = warp::path!("metrics").and_then(metrics_handler);

    info!("metrics server listening on {}", addr);
    let (_, server) =
        warp::serve(metrics_route).bind_with_graceful_shutdown(addr, async move {
            let _ = shutdown_signal.changed().await;
        });
    server.await;
}

async fn metrics_handler() -> Result<impl Reply, Rejection> {
    Ok(encode(&REGISTRY))
}

/// Text exposition of everything in `registry`.
pub fn encode(registry: &Registry) -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        error!("could not encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_else(|e| {
        error!("metrics could not be from_utf8'd: {}", e);
        String::default()
    })
}
