//! Application constants for the log auditor
//!
//! This module contains the fixed values shared across the scanning
//! pipeline and the CLI.

// =============================================================================
// Line Classification
// =============================================================================

/// Literal substring that marks a relevant log line
pub const MARKER: &str = "2FA - Email";

/// chrono format of the leading date token on a log line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Highest valid hour-of-day bucket
pub const MAX_HOUR: u8 = 23;

// =============================================================================
// File Discovery
// =============================================================================

/// Extension of candidate log files directly inside a scanned folder
pub const LOG_FILE_EXTENSION: &str = "txt";
