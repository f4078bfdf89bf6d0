//! Per-folder scanning of `.txt` log files.
//!
//! One scan pass enumerates the `.txt` files directly inside a folder
//! (non-recursive), feeds every line through the classifier, and
//! accumulates daily, hourly, and per-file tallies into a [`FolderResult`].
//! Failures at the folder level are captured as data on the result rather
//! than raised, so a missing network share never disturbs the scans of
//! other folders.

use crate::analyzer::classifier::classify;
use crate::constants::LOG_FILE_EXTENSION;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Terminal failure for a single folder scan.
///
/// Both kinds end processing of the affected folder only; file-level
/// open/read problems are warnings, not scan errors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ScanError {
    /// Folder missing, unreadable, or enumeration failed
    #[error("error reading folder: {reason}")]
    FolderAccess { reason: String },

    /// Enumeration succeeded but matched zero `.txt` files
    #[error("no .txt files found in folder")]
    NoMatchingFiles,
}

/// Tallies for one scanned folder.
///
/// Created once per scan invocation and never mutated after return. All
/// maps are empty and `total_count` is zero when `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct FolderResult {
    /// The folder this result describes
    pub folder_path: PathBuf,
    /// Matches per `YYYY-MM-DD` date
    pub date_counts: BTreeMap<String, u64>,
    /// Matches per file name (an entry per opened file, even at zero)
    pub file_counts: BTreeMap<String, u64>,
    /// Matches per date per hour-of-day; a date may be absent here while
    /// present in `date_counts` when no hour parsed for it
    pub hourly_counts: BTreeMap<String, BTreeMap<u8, u64>>,
    /// Total matches across the folder
    pub total_count: u64,
    /// Terminal failure, when the folder could not be scanned at all
    pub error: Option<ScanError>,
}

impl FolderResult {
    pub(crate) fn new(folder_path: &Path) -> Self {
        Self {
            folder_path: folder_path.to_path_buf(),
            date_counts: BTreeMap::new(),
            file_counts: BTreeMap::new(),
            hourly_counts: BTreeMap::new(),
            total_count: 0,
            error: None,
        }
    }

    pub(crate) fn failed(folder_path: &Path, error: ScanError) -> Self {
        Self {
            error: Some(error),
            ..Self::new(folder_path)
        }
    }

    /// Whether the folder was scanned without a terminal failure.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Scan one folder for marker entries.
///
/// Files are processed independently; the tallies are commutative sums, so
/// no file-processing order is guaranteed or needed. Unreadable individual
/// files are logged at `warn` and skipped.
pub async fn scan_folder(folder_path: &Path) -> FolderResult {
    let files = match discover_log_files(folder_path).await {
        Ok(files) => files,
        Err(e) => {
            return FolderResult::failed(
                folder_path,
                ScanError::FolderAccess {
                    reason: e.to_string(),
                },
            );
        }
    };

    if files.is_empty() {
        return FolderResult::failed(folder_path, ScanError::NoMatchingFiles);
    }

    debug!(
        "Scanning {} log file(s) in {}",
        files.len(),
        folder_path.display()
    );

    let mut result = FolderResult::new(folder_path);
    for file_path in &files {
        if let Err(e) = tally_file(file_path, &mut result).await {
            warn!("Error opening file {}: {}", file_path.display(), e);
        }
    }

    result
}

/// Enumerate `.txt` files directly inside the folder (non-recursive).
///
/// Sorted by name so reports are deterministic.
async fn discover_log_files(folder_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut dir = fs::read_dir(folder_path).await?;

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();
        if is_log_file(&path) && entry.file_type().await?.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_log_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == LOG_FILE_EXTENSION)
        .unwrap_or(false)
}

/// Read one file line-by-line and fold its matches into `result`.
///
/// A read error mid-file keeps the tallies accumulated so far; the file's
/// `file_counts` entry is recorded either way once the file was opened.
async fn tally_file(file_path: &Path, result: &mut FolderResult) -> io::Result<()> {
    let file = fs::File::open(file_path).await?;

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string());

    let mut lines = BufReader::new(file).lines();
    let mut file_count: u64 = 0;

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Some(matched) = classify(&line) {
                    file_count += 1;
                    result.total_count += 1;
                    if let Some(hour) = matched.hour {
                        *result
                            .hourly_counts
                            .entry(matched.date.clone())
                            .or_default()
                            .entry(hour)
                            .or_insert(0) += 1;
                    }
                    *result.date_counts.entry(matched.date).or_insert(0) += 1;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Error reading file {}: {}", file_path.display(), e);
                break;
            }
        }
    }

    result.file_counts.insert(file_name, file_count);
    Ok(())
}
