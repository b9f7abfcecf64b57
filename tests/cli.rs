use assert_cmd::Command;
use featmap::models::manifest::Manifest;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("featmap").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A small corpus: two directories, one test with a title, one reference
/// variant, and a grep output file pointing into it.
fn make_corpus(base: &Path) -> PathBuf {
    let root = base.join("corpus");
    fs::create_dir_all(root.join("css")).unwrap();
    fs::create_dir_all(root.join("anchors")).unwrap();
    fs::write(
        root.join("css/grid-1.html"),
        "<!doctype html>\n<title>Grid placement</title>\n<style>\ndisplay: grid;\n</style>\n",
    )
    .unwrap();
    fs::write(root.join("css/grid-1-ref.html"), "<p>reference</p>\n").unwrap();
    fs::write(
        root.join("anchors/pos-1.html"),
        "<div>\nanchor-name: --a;\n</div>\n",
    )
    .unwrap();
    fs::write(
        root.join("hits.txt"),
        "css/grid-1.html:4:display: grid;\nanchors/pos-1.html:anchor-name: --a;\n",
    )
    .unwrap();
    root
}

#[test]
fn version_prints() {
    cmd().arg("version").assert().success();
}

#[test]
fn report_requires_arguments() {
    cmd().arg("report").assert().failure();
}

#[test]
fn report_rejects_missing_input() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["report", "nope.txt", "grid"])
        .assert()
        .code(2)
        .stderr(contains("Input file not found"));
}

#[test]
fn report_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    cmd()
        .current_dir(&root)
        .args(["report", "hits.txt", "css-grid"])
        .assert()
        .success()
        .stdout(contains("Report generated: hits-report.md"));

    let md = fs::read_to_string(root.join("hits-report.md")).unwrap();
    assert!(md.starts_with("# css-grid Search Results\n"));
    assert!(md.contains("**Total files found:** 2"));
    // Lexicographic directory groups, recovered and explicit line numbers
    let anchors_at = md.find("## Directory: `anchors`").unwrap();
    let css_at = md.find("## Directory: `css`").unwrap();
    assert!(anchors_at < css_at);
    assert!(md.contains("**Description:** Grid placement"));
    assert!(md.contains("→    4 | display: grid;"));
    assert!(md.contains("css/grid-1.html#L4"));
    assert!(md.contains("anchors/pos-1.html#L2"));
}

#[test]
fn features_rejects_empty_input() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["features", "grid"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(contains("No file paths provided"));
}

#[test]
fn features_merges_and_classifies() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    cmd()
        .current_dir(&root)
        .args(["features", "grid"])
        .write_stdin("css/grid-1.html\ncss/grid-1-ref.html\ncss/z.htm\n")
        .assert()
        .success()
        .stdout(contains("Test files: 2"))
        .stdout(contains("Total files: 3"))
        .stdout(contains("Manifests generated: 1"));

    let manifest = Manifest::load(&root.join("css/WEB_FEATURES.yml")).unwrap();
    assert_eq!(manifest.features.len(), 1);
    assert_eq!(manifest.features[0].name, "grid");
    assert_eq!(
        manifest.features[0].files,
        vec!["grid-1.html".to_string(), "z.htm".to_string()]
    );
}

#[test]
fn features_reruns_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    let run = |root: &Path| {
        cmd()
            .current_dir(root)
            .args(["features", "grid"])
            .write_stdin("css/grid-1.html\ncss/z.htm\n")
            .assert()
            .success();
    };
    run(&root);
    let first = fs::read(root.join("css/WEB_FEATURES.yml")).unwrap();
    run(&root);
    assert_eq!(fs::read(root.join("css/WEB_FEATURES.yml")).unwrap(), first);
}

#[test]
fn features_preserves_unrelated_entries() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    cmd()
        .current_dir(&root)
        .args(["features", "grid"])
        .write_stdin("css/grid-1.html\n")
        .assert()
        .success();
    cmd()
        .current_dir(&root)
        .args(["features", "flex"])
        .write_stdin("css/flex-1.html\n")
        .assert()
        .success()
        .stdout(contains("Manifests updated: 1"));

    let manifest = Manifest::load(&root.join("css/WEB_FEATURES.yml")).unwrap();
    assert_eq!(manifest.features[0].name, "grid");
    assert_eq!(manifest.features[0].files, vec!["grid-1.html".to_string()]);
    assert_eq!(manifest.features[1].name, "flex");
}

#[test]
fn features_json_output() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    let out = cmd()
        .current_dir(&root)
        .args(["features", "grid", "--output", "json"])
        .write_stdin("css/grid-1.html\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["summary"]["test_files"], 1);
    assert_eq!(json["manifests"][0]["action"], "generated");
}

#[test]
fn features_accepts_grep_match_lines() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    cmd()
        .current_dir(&root)
        .args(["features", "grid"])
        .write_stdin("css/grid-1.html:display: grid;\n")
        .assert()
        .success();
    let manifest = Manifest::load(&root.join("css/WEB_FEATURES.yml")).unwrap();
    assert_eq!(manifest.features[0].files, vec!["grid-1.html".to_string()]);
}

#[test]
fn status_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let root = make_corpus(tmp.path());
    cmd()
        .current_dir(&root)
        .args(["features", "grid"])
        .write_stdin("css/grid-1.html\n")
        .assert()
        .success();
    fs::write(root.join("progress.csv"), "grid,,\nflexbox,,\nframes,,skip\n").unwrap();

    cmd()
        .current_dir(&root)
        .args(["status"])
        .assert()
        .success()
        .stdout(contains("Classified:          1"))
        .stdout(contains("Unclassifiable:      1"))
        .stdout(contains("Total:             3"));
}

#[test]
fn status_rejects_missing_worksheet() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(tmp.path())
        .args(["status"])
        .assert()
        .code(2)
        .stderr(contains("Progress worksheet not found"));
}
