//! Concurrent dispatcher tests

use crate::analyzer::dispatcher::scan_all;
use crate::analyzer::scanner::ScanError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn folder_with_entries(temp_dir: &TempDir, name: &str, lines: &str) -> PathBuf {
    let folder = temp_dir.path().join(name);
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("auth.txt"), lines).unwrap();
    folder
}

#[tokio::test]
async fn test_results_preserve_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = folder_with_entries(
        &temp_dir,
        "first",
        "2024-01-15 09:00:00 2FA - Email sent\n",
    );
    let missing = temp_dir.path().join("missing");
    let second = folder_with_entries(
        &temp_dir,
        "second",
        "2024-02-01 10:00:00 2FA - Email sent\n",
    );

    let folders = vec![first.clone(), missing.clone(), second.clone()];
    let results = scan_all(&folders).await;

    assert_eq!(results.len(), folders.len());
    assert_eq!(results[0].folder_path, first);
    assert_eq!(results[1].folder_path, missing);
    assert_eq!(results[2].folder_path, second);

    assert!(results[0].is_success());
    assert!(matches!(
        results[1].error,
        Some(ScanError::FolderAccess { .. })
    ));
    assert!(results[2].is_success());
}

#[tokio::test]
async fn test_failed_folder_does_not_disturb_others() {
    let temp_dir = TempDir::new().unwrap();
    let good = folder_with_entries(
        &temp_dir,
        "good",
        "2024-01-15 09:00:00 2FA - Email sent\n\
         2024-01-15 09:30:00 2FA - Email sent\n",
    );
    let empty = temp_dir.path().join("empty");
    fs::create_dir(&empty).unwrap();

    let results = scan_all(&[empty, good]).await;

    assert_eq!(results[0].error, Some(ScanError::NoMatchingFiles));
    assert_eq!(results[1].total_count, 2);
}

#[tokio::test]
async fn test_empty_input_yields_empty_output() {
    let results = scan_all(&[]).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_many_folders_all_complete() {
    let temp_dir = TempDir::new().unwrap();
    let folders: Vec<PathBuf> = (0..16)
        .map(|i| {
            folder_with_entries(
                &temp_dir,
                &format!("folder-{i}"),
                "2024-01-15 12:00:00 2FA - Email sent\n",
            )
        })
        .collect();

    let results = scan_all(&folders).await;

    assert_eq!(results.len(), 16);
    for (result, folder) in results.iter().zip(&folders) {
        assert_eq!(&result.folder_path, folder);
        assert_eq!(result.total_count, 1);
    }
}
