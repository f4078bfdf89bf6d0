//! Concurrent fan-out of folder scans.
//!
//! Each requested folder gets its own spawned task; the dispatcher joins
//! all of them before returning. Tasks share nothing: every task owns the
//! [`FolderResult`] it produces and the results land in input order, so no
//! synchronization beyond the join is involved.

use crate::analyzer::scanner::{scan_folder, FolderResult, ScanError};
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::debug;

/// Scan every folder concurrently, one task per folder.
///
/// The returned vector has the same length as `folder_paths` and the result
/// at index `i` belongs to `folder_paths[i]`, regardless of completion
/// order. The call resolves only after every scan task has finished; a slow
/// folder delays the return but never the other folders' scans.
pub async fn scan_all(folder_paths: &[PathBuf]) -> Vec<FolderResult> {
    debug!("Dispatching {} folder scan task(s)", folder_paths.len());

    let handles: Vec<JoinHandle<FolderResult>> = folder_paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { scan_folder(&path).await }))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(folder_paths) {
        match handle.await {
            Ok(result) => results.push(result),
            // A panicked or aborted task still fills its slot, keeping the
            // failures-as-data contract intact for the caller.
            Err(e) => results.push(FolderResult::failed(
                path,
                ScanError::FolderAccess {
                    reason: format!("scan task failed: {e}"),
                },
            )),
        }
    }

    results
}
