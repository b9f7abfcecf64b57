//! Markdown report rendering for parsed search matches.
//!
//! Files are grouped by directory, annotated with an extracted description
//! and per-match context windows, and every entry links back to the hosted
//! corpus. Output is deterministic: directories and files sort
//! lexicographically, matches keep parse order.

use crate::config::Effective;
use crate::context;
use crate::parse::{self, FileMatches};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a report run, consumed by the printers.
pub struct ReportOutcome {
    pub output_path: String,
    pub files: usize,
}

/// Render the Markdown report for parsed matches.
///
/// `source_name` names the input the matches came from and appears in the
/// provenance line. File reads happen under `eff.repo_root`.
pub fn render_report(
    file_matches: &FileMatches,
    report_title: &str,
    source_name: &str,
    eff: &Effective,
) -> String {
    // Group by containing directory; directory-less paths group under "."
    let mut by_directory: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for filepath in file_matches.keys() {
        let directory = match filepath.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => ".",
        };
        by_directory.entry(directory).or_default().push(filepath);
    }

    let mut out: Vec<String> = Vec::new();
    out.push(format!("# {} Search Results\n", report_title));
    out.push(format!("*Generated from {}*\n", source_name));
    out.push(format!("**Total files found:** {}\n", file_matches.len()));

    for (directory, files) in &by_directory {
        out.push(format!("\n## Directory: `{}`\n", directory));

        for filepath in files {
            let url = format!("{}/{}", eff.base_url, filepath);
            out.push(format!("\n### [{}]({})\n", filepath, url));

            let abs = eff.repo_root.join(filepath);
            if let Some(title) = context::extract_title(&abs) {
                out.push(format!("**Description:** {}\n", title));
            }

            for record in &file_matches[*filepath] {
                let window = context::get_context(&abs, record.line_number, eff.context);
                if window.is_empty() {
                    continue;
                }
                out.push("\n```".to_string());
                for (num, text) in &window {
                    let prefix = if *num == record.line_number { "→" } else { " " };
                    out.push(format!("{} {:4} | {}", prefix, num, text));
                }
                out.push("```".to_string());
                out.push(format!("[View in file]({}#L{})\n", url, record.line_number));
            }
        }
    }
    out.join("\n")
}

/// Derive the report path from the input path: a trailing `.txt` becomes
/// `-report.md`; any other name gets `-report.md` appended so the input is
/// never overwritten.
pub fn derive_output_name(input: &str) -> String {
    match input.strip_suffix(".txt") {
        Some(stem) => format!("{}-report.md", stem),
        None => format!("{}-report.md", input),
    }
}

/// Parse the search output at `input`, render its report, and write the
/// report next to the input file.
pub fn run_report(input: &Path, report_title: &str, eff: &Effective) -> io::Result<ReportOutcome> {
    let raw = fs::read(input).map(|b| String::from_utf8_lossy(&b).into_owned())?;
    let matches = parse::parse_matches(&raw, &eff.repo_root);

    let source_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string_lossy().into_owned());
    let markdown = render_report(&matches, report_title, &source_name, eff);

    let output_path = derive_output_name(&input.to_string_lossy());
    fs::write(&output_path, markdown)?;
    Ok(ReportOutcome {
        output_path,
        files: matches.len(),
    })
}
