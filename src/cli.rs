//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "featmap",
    version,
    about = "Classify test files into feature manifests and report search matches",
    long_about = "Featmap — a small CLI to render Markdown reports from search output and to maintain per-directory WEB_FEATURES.yml manifests mapping features to test files.\n\nConfiguration precedence: CLI > featmap.toml > defaults.",
    after_help = "Examples:\n  featmap report css-grid.txt css-grid\n  git grep -l 'display: grid' -- css/ | featmap features grid\n  featmap status --progress progress.csv",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for reporting, manifest generation, and progress.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current featmap version."
    )]
    Version,
    /// Render a Markdown report from search output
    #[command(
        about = "Render a search-match report",
        long_about = "Parse grep-style search output (path:line:content or path:content) and render a Markdown report with context windows and corpus links. The report is written next to the input file.",
        after_help = "Examples:\n  featmap report css-grid.txt css-grid\n  featmap report anchors.txt anchors --output json"
    )]
    Report {
        #[arg(help = "Search output file to parse")]
        input_file: String,
        #[arg(help = "Title for the generated report")]
        report_title: String,
        #[arg(long, help = "Corpus root (default: discovered from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Merge a feature classification into per-directory manifests
    #[command(
        about = "Generate or update feature manifests",
        long_about = "Read file paths (or grep match lines) from stdin, classify them as test files, and upsert one entry per directory manifest. Existing manifests are merged, never clobbered.",
        after_help = "Examples:\n  git grep -l 'anchor-name' -- css/ | featmap features anchor-positioning\n  featmap features grid < files.txt"
    )]
    Features {
        #[arg(default_value = "unknown", help = "Feature name to record")]
        feature_name: String,
        #[arg(long, help = "Corpus root (default: discovered from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Summarize classification progress
    #[command(
        about = "Summarize classification progress",
        long_about = "Collect the feature names recorded across all manifests under the corpus root and cross-reference the progress worksheet.",
        after_help = "Examples:\n  featmap status\n  featmap status --progress sheets/progress.csv --output json"
    )]
    Status {
        #[arg(long, help = "Progress worksheet path, relative to the corpus root (default: progress.csv)")]
        progress: Option<String>,
        #[arg(long, help = "Corpus root (default: discovered from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
