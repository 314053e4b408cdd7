//! h3cauth: H3C 802.1X supplicant
//!
//! Usage:
//!   h3cauth -I eth0 -u alice -p secret
//!
//! Needs privileges to open a live capture on the interface.

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use h3cauth_cli::{run, Cli, Outcome, SupplicantConfig};
use tokio::signal;
use tracing::{error, info, warn};

/// Initializes the tracing subscriber for logging.
fn init_logging(default_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.log_level());

    let config = match SupplicantConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Authenticating {} on {}", config.username, config.interface);

    let stop = Arc::new(AtomicBool::new(false));
    let worker_stop = Arc::clone(&stop);
    let interface = config.interface.clone();
    let mut worker = tokio::task::spawn_blocking(move || run(&config, &worker_stop));

    let finished = tokio::select! {
        joined = &mut worker => Some(joined),
        _ = signal::ctrl_c() => None,
    };

    let joined = match finished {
        Some(joined) => joined,
        None => {
            info!("Received Ctrl+C, stopping...");
            stop.store(true, Ordering::Relaxed);
            worker.await
        }
    };

    match joined {
        Ok(Ok(outcome)) => {
            match &outcome {
                Outcome::Authenticated => info!("Authenticated on {}", interface),
                Outcome::Rejected(reason) => error!("Authentication rejected: {}", reason),
                Outcome::Interrupted => warn!("Stopped before the server answered"),
            }
            ExitCode::from(outcome.exit_code())
        }
        Ok(Err(e)) => {
            error!("Supplicant failed: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Supplicant task panicked: {}", e);
            ExitCode::FAILURE
        }
    }
}
