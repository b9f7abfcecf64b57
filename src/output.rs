//! Output rendering for report, features, and status commands.
//!
//! Supports `human` (default) and `json` outputs. JSON composition lives in
//! pure helpers so shapes can be asserted without capturing stdout.
//! Per-directory reset notes go to stderr, keeping stdout parseable.

use crate::features::ManifestAction;
use crate::models::{MergeSummary, StatusSummary};
use crate::report::ReportOutcome;
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the outcome of a report run.
pub fn print_report(outcome: &ReportOutcome, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(outcome)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if color {
                println!(
                    "{} {} ({} files)",
                    "Report generated:".green().bold(),
                    outcome.output_path.bold(),
                    outcome.files
                );
            } else {
                println!(
                    "Report generated: {} ({} files)",
                    outcome.output_path, outcome.files
                );
            }
        }
    }
}

/// Print per-directory manifest actions and the merge summary.
pub fn print_features(actions: &[ManifestAction], summary: &MergeSummary, output: &str) {
    for a in actions {
        if a.reset {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("Could not read {}; starting fresh.", a.manifest_path)
            );
        }
    }
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_features_json(actions, summary)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for a in actions {
                let label = if a.existed { "Updated:" } else { "Generated:" };
                if color {
                    println!("{} {}", label.green().bold(), a.manifest_path);
                } else {
                    println!("{} {}", label, a.manifest_path);
                }
            }
            println!();
            println!("Summary:");
            println!("  Total files: {}", summary.total_files);
            println!("  Test files: {}", summary.test_files);
            println!("  Directories: {}", summary.directories);
            println!("  Manifests generated: {}", summary.generated);
            println!("  Manifests updated: {}", summary.updated);
        }
    }
}

/// Print the progress status table.
pub fn print_status(summary: &StatusSummary, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_status_json(summary)).unwrap()
        ),
        _ => {
            println!("All classified:    {:3}", summary.all_classified);
            println!("Classified:        {:3}", summary.classified);
            println!("Unclassifiable:    {:3}", summary.unclassifiable);
            println!("Unclassified:    + {:3}", summary.unclassified);
            println!("                 -----");
            println!("Total:             {}", summary.total);
            println!("Progress:          {:.0}%", summary.percent);
        }
    }
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(outcome: &ReportOutcome) -> JsonVal {
    json!({
        "output": outcome.output_path,
        "files": outcome.files,
    })
}

/// Compose features JSON object (pure) for testing/snapshot purposes.
pub fn compose_features_json(actions: &[ManifestAction], summary: &MergeSummary) -> JsonVal {
    let items: Vec<_> = actions
        .iter()
        .map(|a| {
            json!({
                "manifest": a.manifest_path,
                "action": if a.existed { "updated" } else { "generated" },
                "reset": a.reset,
            })
        })
        .collect();
    json!({
        "manifests": items,
        "summary": serde_json::to_value(summary).unwrap(),
    })
}

/// Compose status JSON object (pure) for testing/snapshot purposes.
pub fn compose_status_json(summary: &StatusSummary) -> JsonVal {
    serde_json::to_value(summary).unwrap()
}
