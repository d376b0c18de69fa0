use std::env;
use std::path::Path;

use sumpwatch::action::ActionExecutor;
use sumpwatch::constants::DEFAULT_CONFIG_PATH;
use sumpwatch::hardware::SysfsGpio;
use sumpwatch::metrics;
use sumpwatch::utils::file_io;
use sumpwatch::utils::time::now_secs;
use sumpwatch::ConfigSource;
use sumpwatch::Error;
use sumpwatch::FileConfigSource;
use sumpwatch::LoggingConfig;
use sumpwatch::Result;
use sumpwatch::SumpMonitor;
use tokio::signal::unix::signal;
use tokio::signal::unix::SignalKind;
use tokio::sync::watch;
use tracing::error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let verbose = env::args().skip(1).any(|a| a == "-v");
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    // Configuration problems at startup are fatal
    let source = FileConfigSource::new(&config_path);
    let fingerprint = source.fingerprint()?;
    let settings = source.load()?;

    // Initializing Logs; must precede validate(), which may warn
    settings.logging.validate()?;
    let _guard = init_observability(&settings.logging, verbose)?;
    info!("Read config from {}", config_path);
    let settings = settings.validate()?;

    // Initializing Shutdown Signal
    let (graceful_tx, graceful_rx) = watch::channel(());

    if settings.monitoring.prometheus_enabled {
        let addr = settings.monitoring.socket_addr();
        let shutdown = graceful_rx.clone();
        tokio::spawn(async move {
            metrics::start_server(addr, shutdown).await;
        });
    }

    let (dispatcher, executor) = ActionExecutor::channel();
    tokio::spawn(executor.run());

    let monitor = SumpMonitor::new(
        &settings,
        fingerprint,
        source,
        SysfsGpio::default(),
        dispatcher,
        now_secs(),
    )?;

    if verbose {
        info!("Application started");
    } else {
        info!("Daemon started");
    }

    // Listen on Shutdown Signal
    tokio::spawn(async {
        if let Err(e) = graceful_shutdown(graceful_tx).await {
            error!("Failed to shutdown: {:?}", e);
        }
    });

    if let Err(e) = monitor.run(graceful_rx).await {
        error!("monitor stops: {:?}", e);
        return Err(e);
    }

    info!("Exiting program.");
    Ok(())
}

async fn graceful_shutdown(graceful_tx: watch::Sender<()>) -> Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;
    tokio::select! {
        _ = sigint.recv() => {
            info!("Process terminated by user.");
        },
        _ = sigterm.recv() => {
            info!("Process terminated by system.");
        },
        _ = sighup.recv() => {
            info!("Process hung up by system.");
        },
    }

    graceful_tx.send(()).map_err(|e| {
        error!("Failed to send shutdown signal: {}", e);
        Error::SignalSenderClosed(format!("Failed to send shutdown signal: {}", e))
    })?;

    Ok(())
}

/// Logs go to stdout in the foreground (`-v`), otherwise to `logging.log_file`.
///
/// `RUST_LOG` wins over `logging.level` when set.
fn init_observability(
    logging: &LoggingConfig,
    verbose: bool,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if verbose {
        let layer = tracing_subscriber::fmt::layer().with_filter(filter);
        tracing_subscriber::registry().with(layer).init();
        return Ok(None);
    }

    let log_file = file_io::open_file_for_append(Path::new(&logging.log_file))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry().with(layer).init();

    Ok(Some(guard))
}
