//! Title and context extraction for report rendering.
//!
//! Both operations are best-effort: any I/O failure degrades to "no result"
//! so a single unreadable file never aborts a report.

use crate::parse::read_lossy;
use regex::Regex;
use std::path::Path;

/// Lines surrounding a match, paired with their 1-based numbers.
pub type ContextWindow = Vec<(usize, String)>;

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Extract a short descriptive title from the start of a file.
///
/// Considers at most the first 2000 characters and tries, in order: an HTML
/// `<title>` element, a `//`/`#`/`/*` comment opener at the start of a line,
/// and the string literal of a `test(...)` or `describe(...)` call. The
/// first pattern that matches wins, even when its text is empty.
pub fn extract_title(path: &Path) -> Option<String> {
    let content = read_lossy(path)?;
    let head: String = content.chars().take(2000).collect();

    let title = Regex::new(r"(?is)<title>(.*?)</title>").expect("valid title pattern");
    if let Some(c) = title.captures(&head) {
        return non_empty(&c[1]);
    }
    let comment = Regex::new(r"(?m)^(?://|#|/\*)\s*(.+?)(?:\*/|$)").expect("valid comment pattern");
    if let Some(c) = comment.captures(&head) {
        return non_empty(&c[1]);
    }
    let test_call =
        Regex::new(r#"(?:test|describe)\(["'](.+?)["']"#).expect("valid test-call pattern");
    if let Some(c) = test_call.captures(&head) {
        return non_empty(&c[1]);
    }
    None
}

/// Collect the window of lines around a 1-based `line_number`, clipped to
/// file bounds. Each line is paired with its number and right-trimmed.
/// Returns an empty window when the file cannot be read.
pub fn get_context(path: &Path, line_number: usize, radius: usize) -> ContextWindow {
    let content = match read_lossy(path) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let lines: Vec<&str> = content.lines().collect();
    let start = line_number.saturating_sub(radius + 1);
    let end = (line_number + radius).min(lines.len());

    let mut window = Vec::new();
    for i in start..end {
        window.push((i + 1, lines[i].trim_end().to_string()));
    }
    window
}
