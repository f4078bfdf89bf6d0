//! The analyze command: scan, aggregate, report
//!
//! Resolves the folder list, fans the scans out concurrently, merges the
//! results, and renders either the human-readable sectioned report or a
//! JSON document for downstream tooling.

use crate::analyzer::{aggregate, average_per_hour, scan_all, AggregateReport, FolderResult};
use crate::cli::args::{Args, OutputFormat};
use crate::cli::commands::shared::create_scan_spinner;
use crate::constants::MARKER;
use crate::Result;
use colored::Colorize;
use tracing::info;

const SECTION_RULE: &str =
    "================================================================================";

/// Run the full scan-and-report workflow.
pub async fn run_analyze(args: Args) -> Result<()> {
    let folders = args.resolve_folders()?;

    // Part of the report, not a diagnostic; JSON mode keeps stdout pure.
    if args.format == OutputFormat::Human {
        println!("Analyzing {} folder(s)...", folders.len());
    }
    info!("Analyzing {} folder(s)", folders.len());

    let show_spinner = args.format == OutputFormat::Human && !args.quiet;
    let spinner = show_spinner.then(|| {
        create_scan_spinner(&format!("Scanning {} folder(s)...", folders.len()))
    });

    let results = scan_all(&folders).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = aggregate(&results);

    match args.format {
        OutputFormat::Human => print_human_report(&results, &report, args.detailed),
        OutputFormat::Json => print_json_report(&results, &report),
    }

    Ok(())
}

/// Render the sectioned per-folder and aggregate report.
fn print_human_report(results: &[FolderResult], report: &AggregateReport, detailed: bool) {
    println!("\n{SECTION_RULE}");
    println!("RESULTS BY FOLDER");
    println!("{SECTION_RULE}");

    for result in results {
        if let Some(error) = &result.error {
            println!(
                "\n{} Folder: {}",
                "[ERROR]".red().bold(),
                result.folder_path.display()
            );
            println!("  Error: {}", error);
            continue;
        }

        println!(
            "\n{} Folder: {}",
            "[SUCCESS]".green().bold(),
            result.folder_path.display()
        );

        if detailed && !result.file_counts.is_empty() {
            println!("  Files:");
            for (file_name, count) in &result.file_counts {
                println!("    - {}: {} entries", file_name, count);
            }
        }

        if detailed && !result.date_counts.is_empty() {
            println!("  Per-Day Statistics:");
            for (date, count) in &result.date_counts {
                let avg_per_hour = result
                    .hourly_counts
                    .get(date)
                    .map(|hourly| average_per_hour(hourly, *count))
                    .unwrap_or(0.0);
                println!(
                    "    - {}: {} entries (avg {:.2} entries/hour)",
                    date, count, avg_per_hour
                );
            }
        }

        println!("  Total '{}' entries: {}", MARKER, result.total_count);
    }

    if report.is_empty() {
        println!("\n{SECTION_RULE}");
        println!("No entries with '{}' found in any log files.", MARKER);
        return;
    }

    println!("\n{SECTION_RULE}");
    println!("AGGREGATE RESULTS (ALL FOLDERS)");
    println!("{SECTION_RULE}");

    println!("\n{} Entries by Date:", MARKER);
    for (date, count) in &report.date_counts {
        println!("  {}: {} entries", date, count);
    }

    println!("\nSummary:");
    println!("  Total folders processed: {}", report.folders_attempted);
    println!("  Successful folders: {}", report.folders_succeeded);
    println!(
        "  Total entries with '{}': {}",
        MARKER, report.total_count
    );
    println!("  Total distinct days: {}", report.distinct_dates);
    if let Some(average) = report.average_per_day() {
        println!("  Average entries per day: {:.2}", average);
    }
}

/// Render the report as a JSON document on stdout.
fn print_json_report(results: &[FolderResult], report: &AggregateReport) {
    let document = serde_json::json!({
        "folders": results,
        "aggregate": report,
        "average_per_day": report.average_per_day(),
    });

    match serde_json::to_string_pretty(&document) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}
