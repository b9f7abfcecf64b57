//! Classification progress summary.
//!
//! Cross-references the feature names recorded in manifests across the
//! corpus with the progress worksheet: worksheet column 0 is the feature
//! name and a non-empty column 2 marks the feature unclassifiable.
//! Unreadable manifests and malformed worksheet rows are skipped.

use crate::config::Effective;
use crate::models::manifest::Manifest;
use crate::models::StatusSummary;
use glob::glob;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Collect every feature name recorded in manifests under `root`.
pub fn find_classified(root: &Path, manifest_filename: &str) -> BTreeSet<String> {
    let pattern = root.join("**").join(manifest_filename);
    let mut names = BTreeSet::new();
    if let Ok(entries) = glob(&pattern.to_string_lossy()) {
        for path in entries.flatten() {
            if let Some(manifest) = Manifest::load(&path) {
                for entry in manifest.features {
                    names.insert(entry.name);
                }
            }
        }
    }
    names
}

/// Bucket the worksheet rows against the manifests under the repo root.
pub fn run_status(progress_path: &Path, eff: &Effective) -> io::Result<StatusSummary> {
    let all_classified = find_classified(&eff.repo_root, &eff.manifest_filename);

    let data = fs::read_to_string(progress_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut classified = BTreeSet::new();
    let mut unclassifiable = BTreeSet::new();
    let mut unclassified = BTreeSet::new();
    for record in reader.records().flatten() {
        let name = match record.get(0) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => continue,
        };
        if record.get(2).map(|s| !s.is_empty()).unwrap_or(false) {
            unclassifiable.insert(name);
        } else if all_classified.contains(&name) {
            classified.insert(name);
        } else {
            unclassified.insert(name);
        }
    }

    let total = classified.len() + unclassifiable.len() + unclassified.len();
    let percent = if total == 0 {
        100.0
    } else {
        100.0 * (1.0 - unclassified.len() as f64 / total as f64)
    };
    Ok(StatusSummary {
        all_classified: all_classified.len(),
        classified: classified.len(),
        unclassifiable: unclassifiable.len(),
        unclassified: unclassified.len(),
        total,
        percent,
    })
}
