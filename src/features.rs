//! Manifest generation from classified file lists.
//!
//! Incoming paths are classified as test files or not, grouped by directory,
//! and each directory's manifest gets exactly one feature entry upserted
//! before the manifest is rewritten whole. A manifest that cannot be parsed
//! is reset for that directory only; the run keeps going.

use crate::config::Effective;
use crate::models::manifest::{upsert_feature, Manifest};
use crate::models::MergeSummary;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead};

/// Per-directory write result.
pub struct ManifestAction {
    pub manifest_path: String,
    pub existed: bool,
    pub reset: bool,
}

/// Extract the path portion of a grep match line or plain path.
pub fn match_line_to_path(line: &str) -> &str {
    match line.split_once(':') {
        Some((path, _)) => path,
        None => line.trim(),
    }
}

/// Read newline-delimited paths (or grep match lines) from a reader,
/// dropping blanks.
pub fn read_paths<R: BufRead>(reader: R) -> Vec<String> {
    reader
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| {
            let path = match_line_to_path(&line);
            if path.is_empty() {
                None
            } else {
                Some(path.to_string())
            }
        })
        .collect()
}

/// Whether `path` names an actual test document rather than a reference or
/// support asset. Markers and extensions come from the effective config.
pub fn is_test_path(path: &str, eff: &Effective) -> bool {
    let filename = path.rsplit('/').next().unwrap_or(path);
    if eff.ref_markers.iter().any(|m| filename.contains(m.as_str())) {
        return false;
    }
    if filename.starts_with(&eff.support_prefix) {
        return false;
    }
    if path.split('/').any(|seg| seg == eff.support_dir) {
        return false;
    }
    eff.extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
}

fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", path),
    }
}

/// Merge `feature_name` into the manifests of every directory holding one of
/// `paths`, and return the per-directory actions plus aggregate counts.
pub fn run_features(
    feature_name: &str,
    paths: &[String],
    eff: &Effective,
) -> io::Result<(Vec<ManifestAction>, MergeSummary)> {
    let mut dirs_to_files: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    let mut test_files = 0usize;
    for path in paths {
        if !is_test_path(path, eff) {
            continue;
        }
        test_files += 1;
        let (dir, file) = split_path(path);
        dirs_to_files.entry(dir).or_default().push(file.to_string());
    }

    let mut actions = Vec::new();
    let mut generated = 0usize;
    let mut updated = 0usize;

    for (dir, files) in &mut dirs_to_files {
        files.sort();
        files.dedup();

        let dir_path = eff.repo_root.join(dir);
        let manifest_path = dir_path.join(&eff.manifest_filename);
        let existed = manifest_path.exists();
        let mut reset = false;
        let mut manifest = if existed {
            match Manifest::load(&manifest_path) {
                Some(m) => m,
                None => {
                    reset = true;
                    Manifest::default()
                }
            }
        } else {
            Manifest::default()
        };

        upsert_feature(&mut manifest.features, feature_name, files.clone());

        fs::create_dir_all(&dir_path)?;
        fs::write(&manifest_path, manifest.to_yaml())?;

        if existed {
            updated += 1;
        } else {
            generated += 1;
        }
        actions.push(ManifestAction {
            manifest_path: manifest_path.to_string_lossy().to_string(),
            existed,
            reset,
        });
    }

    let summary = MergeSummary {
        generated,
        updated,
        total_files: paths.len(),
        test_files,
        directories: dirs_to_files.len(),
    };
    Ok((actions, summary))
}
