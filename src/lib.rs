//! Featmap core library.
//!
//! This crate exposes programmatic APIs for parsing search output, rendering
//! match reports, and maintaining per-directory feature manifests.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `parse`: Match parsing for grep-style search output.
//! - `context`: Title and context extraction for reports.
//! - `report`: Markdown report rendering and output naming.
//! - `features`: Manifest generation from classified file lists.
//! - `status`: Progress summary across manifests and the worksheet.
//! - `models`: Data models for manifests and summaries.
//! - `output`: Human/JSON printers for all commands.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod context;
pub mod features;
pub mod models;
pub mod output;
pub mod parse;
pub mod report;
pub mod status;
pub mod utils;
