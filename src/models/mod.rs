//! Shared data models for merge and status summaries, plus the manifest
//! schema module.

pub mod manifest;

use serde::Serialize;

#[derive(Serialize)]
/// Aggregate counts from a manifest merge run.
pub struct MergeSummary {
    pub generated: usize,
    pub updated: usize,
    pub total_files: usize,
    pub test_files: usize,
    pub directories: usize,
}

#[derive(Serialize)]
/// Progress accounting across the corpus and the worksheet.
pub struct StatusSummary {
    pub all_classified: usize,
    pub classified: usize,
    pub unclassifiable: usize,
    pub unclassified: usize,
    pub total: usize,
    pub percent: f64,
}
