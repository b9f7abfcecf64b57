//! Configuration discovery and effective settings resolution.
//!
//! Featmap reads `featmap.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults mirror the corpus conventions:
//! - `report.base_url`: the hosted test tree on GitHub
//! - `report.context`: 1 line each side of a match
//! - `manifest.filename`: `WEB_FEATURES.yml`
//! - `manifest.extensions`: `.html .htm .xht .xhtml .svg .xml`
//! - `manifest.ref_markers`: `-ref.` and `-notref.`
//! - `manifest.support_prefix` / `support_dir`: `support-` / `support`
//! - `status.progress`: `progress.csv`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://github.com/web-platform-tests/wpt/blob/master";
pub const DEFAULT_MANIFEST: &str = "WEB_FEATURES.yml";
const DEFAULT_EXTENSIONS: &[&str] = &[".html", ".htm", ".xht", ".xhtml", ".svg", ".xml"];
const DEFAULT_REF_MARKERS: &[&str] = &["-ref.", "-notref."];

#[derive(Debug, Default, Deserialize, Clone)]
/// Report-related configuration section under `[report]`.
pub struct ReportCfg {
    pub base_url: Option<String>,
    pub context: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Test-file classification settings under `[manifest]`.
pub struct ManifestCfg {
    pub filename: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub ref_markers: Option<Vec<String>>,
    pub support_prefix: Option<String>,
    pub support_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Progress worksheet settings under `[status]`.
pub struct StatusCfg {
    pub progress: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `featmap.toml|yaml`.
pub struct FeatmapConfig {
    pub output: Option<String>,
    pub report: Option<ReportCfg>,
    pub manifest: Option<ManifestCfg>,
    pub status: Option<StatusCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub base_url: String,
    pub context: usize,
    pub manifest_filename: String,
    pub extensions: Vec<String>,
    pub ref_markers: Vec<String>,
    pub support_prefix: String,
    pub support_dir: String,
    pub progress: String,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `featmap.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("featmap.toml").exists()
            || cur.join("featmap.yaml").exists()
            || cur.join("featmap.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FeatmapConfig` from `featmap.toml` or `featmap.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<FeatmapConfig> {
    let toml_path = root.join("featmap.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: FeatmapConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["featmap.yaml", "featmap.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: FeatmapConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_progress: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let report = cfg.report.unwrap_or_default();
    let base_url = report
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let context = report.context.unwrap_or(1);

    let manifest = cfg.manifest.unwrap_or_default();
    let manifest_filename = manifest
        .filename
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
    let extensions = manifest
        .extensions
        .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect());
    let ref_markers = manifest
        .ref_markers
        .unwrap_or_else(|| DEFAULT_REF_MARKERS.iter().map(|s| s.to_string()).collect());
    let support_prefix = manifest
        .support_prefix
        .unwrap_or_else(|| "support-".to_string());
    let support_dir = manifest
        .support_dir
        .unwrap_or_else(|| "support".to_string());

    let progress = cli_progress
        .map(|s| s.to_string())
        .or(cfg.status.unwrap_or_default().progress)
        .unwrap_or_else(|| "progress.csv".to_string());

    Effective {
        repo_root,
        output,
        base_url,
        context,
        manifest_filename,
        extensions,
        ref_markers,
        support_prefix,
        support_dir,
        progress,
    }
}
