//! Log Auditor Library
//!
//! A Rust library for auditing plain-text log folders for two-factor
//! authentication email entries (`2FA - Email`) and reporting per-folder
//! and aggregate statistics.
//!
//! This library provides tools for:
//! - Classifying log lines by marker presence and timestamp prefix
//! - Scanning folders of `.txt` log files, including network mounts
//! - Fanning out independent folder scans across concurrent tasks
//! - Merging per-folder tallies into a global daily report

pub mod config;
pub mod constants;

// Core pipeline modules
pub mod analyzer {
    pub mod aggregate;
    pub mod classifier;
    pub mod dispatcher;
    pub mod scanner;

    #[cfg(test)]
    mod tests;

    pub use aggregate::{aggregate, average_per_hour, AggregateReport};
    pub use classifier::{classify, LineMatch};
    pub use dispatcher::scan_all;
    pub use scanner::{scan_folder, FolderResult, ScanError};
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use analyzer::{AggregateReport, FolderResult, ScanError};
pub use config::Config;

/// Result type alias for the log auditor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for log auditor operations.
///
/// Folder-level scan failures are deliberately *not* represented here; they
/// travel as data inside [`FolderResult`] so one bad folder never aborts the
/// others. This enum covers the surrounding machinery only.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Invalid command-line invocation
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
