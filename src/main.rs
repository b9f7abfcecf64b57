//! Featmap CLI binary entry point.
//! Delegates to modules for report/features/status and prints results.

mod cli;
mod config;
mod context;
mod features;
mod models;
mod output;
mod parse;
mod report;
mod status;
mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            input_file,
            report_title,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None);
            let input = Path::new(&input_file);
            if !input.exists() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Input file not found: {}", input_file)
                );
                std::process::exit(2);
            }
            match report::run_report(input, &report_title, &eff) {
                Ok(outcome) => output::print_report(&outcome, &eff.output),
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("report failed: {}", e)
                    );
                    std::process::exit(1);
                }
            }
        }
        Commands::Features {
            feature_name,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None);
            let stdin = std::io::stdin();
            let paths = features::read_paths(stdin.lock());
            if paths.is_empty() {
                eprintln!("{} {}", utils::error_prefix(), "No file paths provided");
                std::process::exit(1);
            }
            match features::run_features(&feature_name, &paths, &eff) {
                Ok((actions, summary)) => output::print_features(&actions, &summary, &eff.output),
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("manifest generation failed: {}", e)
                    );
                    std::process::exit(1);
                }
            }
        }
        Commands::Status {
            progress,
            repo_root,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                progress.as_deref(),
            );
            let progress_path = eff.repo_root.join(&eff.progress);
            if !progress_path.exists() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Progress worksheet not found: {}",
                        progress_path.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            match status::run_status(&progress_path, &eff) {
                Ok(summary) => output::print_status(&summary, &eff.output),
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("status failed: {}", e)
                    );
                    std::process::exit(1);
                }
            }
        }
    }
}
