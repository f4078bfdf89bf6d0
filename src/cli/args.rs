//! Command-line argument definitions for the log auditor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Folders may be given positionally, loaded from a JSON config file,
//! or both; config folders are appended after positional ones.

use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the log auditor
///
/// Scans folders of plain-text log files for '2FA - Email' entries and
/// reports per-folder and aggregate daily statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "log-auditor",
    version,
    about = "Audit plain-text log folders for '2FA - Email' entries",
    long_about = "Scans every .txt file directly inside the given folders (local or \
                  network-mounted), counts lines containing the literal marker \
                  '2FA - Email', and reports matches per folder, per file, per \
                  calendar date, and per hour of day, plus an aggregate summary \
                  across all folders. Folders are scanned concurrently, so slow \
                  network shares overlap instead of queueing."
)]
pub struct Args {
    /// Folders to scan for .txt log files
    ///
    /// Each folder is scanned non-recursively and independently; an
    /// unreadable folder is reported as failed without affecting the rest.
    #[arg(value_name = "FOLDER")]
    pub folders: Vec<PathBuf>,

    /// Path to a JSON config file listing folders
    ///
    /// Format: { "folders": ["/mnt/server1/logs", "/mnt/server2/logs"] }.
    /// Config folders are appended after any positional folders.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Load folder paths from a JSON config file"
    )]
    pub config_file: Option<PathBuf>,

    /// Show per-file and per-day breakdowns for each folder
    #[arg(long = "detailed", help = "Show per-file and per-day statistics")]
    pub detailed: bool,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress diagnostics (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress diagnostics except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with sections and colors
    Human,
    /// Machine-readable JSON document
    Json,
}

impl Args {
    /// Map the verbosity flags to a tracing filter level.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolve the full ordered folder list from positional arguments and
    /// the optional config file.
    pub fn resolve_folders(&self) -> Result<Vec<PathBuf>> {
        let mut folders = self.folders.clone();

        if let Some(config_path) = &self.config_file {
            let config = Config::load(config_path)?;
            folders.extend(config.folders);
        }

        if folders.is_empty() {
            return Err(Error::invalid_arguments(
                "no folder paths provided (pass folders directly or via --config)",
            ));
        }

        Ok(folders)
    }
}
