//! Command implementation for the log auditor CLI
//!
//! The auditor has a single workflow (scan folders, aggregate, report), so
//! there is one command module plus shared logging/progress helpers.

pub mod analyze;
pub mod shared;

use crate::cli::args::Args;
use crate::Result;

/// Main command runner for the log auditor.
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    analyze::run_analyze(args).await
}
