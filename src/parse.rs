//! Match parsing for grep-style search output.
//!
//! Two line shapes are accepted:
//! - `path:NNN:content`: the line number is explicit.
//! - `path:content`: the line number is recovered by scanning the target
//!   file for the first line containing the trimmed content.
//!
//! Lines matching neither shape are dropped without error, as are lines
//! whose target file cannot be read during recovery. File contents are
//! cached per path for the duration of one parse call.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One matched line inside a file.
pub struct MatchRecord {
    pub line_number: usize,
    pub raw_text: String,
}

/// Path → ordered matches. BTreeMap keys give the lexicographic order the
/// renderer needs; per-file match order is input order.
pub type FileMatches = BTreeMap<String, Vec<MatchRecord>>;

/// Read a file with lossy UTF-8 decoding.
pub fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|b| String::from_utf8_lossy(&b).into_owned())
}

/// Parse raw search output into per-file match records.
///
/// Relative paths inside the input resolve against `root` when a line number
/// has to be recovered.
pub fn parse_matches(raw: &str, root: &Path) -> FileMatches {
    let with_num = Regex::new(r"^([^:]+):(\d+):(.*)$").expect("valid match pattern");
    let without_num = Regex::new(r"^([^:]+):(.*)$").expect("valid match pattern");

    let mut results: FileMatches = BTreeMap::new();
    let mut cache: HashMap<String, Option<Vec<String>>> = HashMap::new();

    for line in raw.lines() {
        if let Some(c) = with_num.captures(line) {
            if let Ok(line_number) = c[2].parse::<usize>() {
                results.entry(c[1].to_string()).or_default().push(MatchRecord {
                    line_number,
                    raw_text: c[3].to_string(),
                });
            }
            continue;
        }
        if let Some(c) = without_num.captures(line) {
            let path = c[1].to_string();
            let content = c[2].to_string();
            if let Some(line_number) = recover_line_number(root, &path, &content, &mut cache) {
                results.entry(path).or_default().push(MatchRecord {
                    line_number,
                    raw_text: content,
                });
            }
        }
    }
    results
}

/// Find the first 1-based line of `root/path` containing the trimmed
/// `content`. `None` when the file is unreadable or nothing matches.
fn recover_line_number(
    root: &Path,
    path: &str,
    content: &str,
    cache: &mut HashMap<String, Option<Vec<String>>>,
) -> Option<usize> {
    let lines = cache.entry(path.to_string()).or_insert_with(|| {
        read_lossy(&root.join(path)).map(|s| s.lines().map(|l| l.to_string()).collect())
    });
    let needle = content.trim();
    lines
        .as_ref()?
        .iter()
        .position(|l| l.contains(needle))
        .map(|idx| idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_line_number_is_kept_exactly() {
        let matches = parse_matches("css/a.html:42:display: grid", Path::new("."));
        let records = &matches["css/a.html"];
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line_number, 42);
        assert_eq!(records[0].raw_text, "display: grid");
    }

    #[test]
    fn test_line_number_recovered_from_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css")).unwrap();
        let body = "a\nb\nc\nd\ne\nf\n  display: grid;\nh\n";
        std::fs::write(dir.path().join("css/a.html"), body).unwrap();

        let matches = parse_matches("css/a.html:display: grid;", dir.path());
        assert_eq!(matches["css/a.html"][0].line_number, 7);
        assert_eq!(matches["css/a.html"][0].raw_text, "display: grid;");
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let raw = "no colon here\n:starts with colon\n";
        let matches = parse_matches(raw, Path::new("."));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_unreadable_file_drops_line_but_not_batch() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("real.html"), "hit me\n").unwrap();
        let raw = "missing.html:anything\nreal.html:hit me\n";
        let matches = parse_matches(raw, dir.path());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches["real.html"][0].line_number, 1);
    }

    #[test]
    fn test_per_file_order_is_input_order() {
        let raw = "a.html:9:z\na.html:3:y\n";
        let matches = parse_matches(raw, Path::new("."));
        let numbers: Vec<usize> = matches["a.html"].iter().map(|r| r.line_number).collect();
        assert_eq!(numbers, vec![9, 3]);
    }

    #[test]
    fn test_content_with_colons_keeps_full_text() {
        let matches = parse_matches("a.html:5:x: y: z", Path::new("."));
        assert_eq!(matches["a.html"][0].raw_text, "x: y: z");
    }
}
