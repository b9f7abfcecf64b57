//! Manifest schema: per-directory feature-to-files records.
//!
//! A manifest is a YAML mapping with a single recognized key, `features`.
//! Anything else is a parse failure, which callers treat as an empty
//! manifest. Entry order is insertion order and survives rewrites.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One classified feature and its test files (sorted basenames).
pub struct FeatureEntry {
    pub name: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// Top-level manifest persisted at a fixed filename inside a directory.
pub struct Manifest {
    pub features: Vec<FeatureEntry>,
}

impl Manifest {
    /// Load a manifest, returning `None` when the file is absent, unreadable,
    /// or not a valid `features` mapping.
    pub fn load(path: &Path) -> Option<Manifest> {
        let s = fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&s).ok()
    }

    /// Serialize for persistence. Field order is fixed by the struct, so the
    /// output is byte-stable across runs.
    pub fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).expect("serialize manifest")
    }
}

/// Replace the files of the entry named `name`, or append a new entry.
///
/// Replacement is wholesale: a re-run with a narrower file set shrinks the
/// recorded list. Entries for other features keep their position.
pub fn upsert_feature(entries: &mut Vec<FeatureEntry>, name: &str, files: Vec<String>) {
    if let Some(entry) = entries.iter_mut().find(|e| e.name == name) {
        entry.files = files;
    } else {
        entries.push(FeatureEntry {
            name: name.to_string(),
            files,
        });
    }
}
