//! Shared components for CLI commands
//!
//! Logging setup and progress indication used by the command
//! implementations.

use crate::cli::args::Args;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Set up structured logging from the CLI verbosity flags.
///
/// Diagnostics go to stderr so the report on stdout stays clean for
/// redirection.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("log_auditor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}

/// Create a spinner shown while the concurrent folder scan is in flight.
///
/// A spinner rather than a bar: per-folder completion is not observable
/// without sharing state between scan tasks, which the pipeline avoids.
pub fn create_scan_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
