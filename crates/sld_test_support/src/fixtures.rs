//! Golden fixture loading.
//!
//! A fixture is a directory holding `input.toml` plus one or more expected
//! output files. Expected files carry `# key: value` headers (`format`,
//! `status`, `reason`) followed by one expected line per item.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureStatus {
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Debug)]
pub struct ExpectedLines {
    pub status: FixtureStatus,
    pub reason: Option<String>,
    pub lines: Vec<String>,
}

/// Template input of one fixture.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureInput {
    /// Literal chunks; a hole sits between each consecutive pair.
    pub chunks: Vec<String>,
    /// Overrides the default raw-text tag set.
    #[serde(default)]
    pub raw_text: Option<Vec<String>>,
    /// Overrides the default void tag set.
    #[serde(default)]
    pub void: Option<Vec<String>>,
}

impl FixtureInput {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("failed to read input {path:?}: {err}"));
        let input: FixtureInput = toml::from_str(&content)
            .unwrap_or_else(|err| panic!("invalid fixture input {path:?}: {err}"));
        if input.chunks.is_empty() {
            panic!("fixture input {path:?} needs at least one chunk");
        }
        input
    }
}

/// Substring filter over fixture names, read from an environment variable.
pub struct FixtureFilter {
    raw: Option<String>,
}

impl FixtureFilter {
    pub fn from_env(key: &str) -> Self {
        Self {
            raw: std::env::var(key).ok().filter(|value| !value.is_empty()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let Some(filter) = &self.raw else {
            return true;
        };
        name.contains(filter)
    }
}

/// Fixture directories under `root`, sorted by name. Dot-directories are
/// skipped.
pub fn fixture_dirs(root: &Path) -> Vec<(String, PathBuf)> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .collect();
    entries.sort_by_key(|entry| entry.file_name());

    let mut out = Vec::new();
    for entry in entries {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name != name.trim() {
            panic!("fixture directory has leading/trailing whitespace: '{name}'");
        }
        if name.starts_with('.') {
            continue;
        }
        out.push((name, path));
    }
    out
}

/// Parse an expected-output file, asserting its `format` header.
pub fn parse_expected_file(path: &Path, format: &str) -> ExpectedLines {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read expected file {path:?}: {err}"));
    let mut lines = Vec::new();
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for raw_line in content.lines() {
        let line = raw_line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(stripped) = line.strip_prefix("# ") {
            let (key, value) = stripped
                .split_once(':')
                .unwrap_or_else(|| panic!("invalid header in {path:?}: '{line}'"));
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            if headers.insert(key.clone(), value).is_some() {
                panic!("duplicate header '{key}' in {path:?}");
            }
        } else {
            lines.push(line.to_string());
        }
    }

    let found = headers
        .get("format")
        .unwrap_or_else(|| panic!("missing format header in {path:?}"));
    assert_eq!(found, format, "unsupported format in {path:?}");

    let status = match headers.get("status").map(String::as_str) {
        Some("active") | None => FixtureStatus::Active,
        Some("xfail") => FixtureStatus::Xfail,
        Some("skip") => FixtureStatus::Skip,
        Some(other) => panic!("unsupported status '{other}' in {path:?}"),
    };
    let reason = headers.get("reason").cloned();
    if matches!(status, FixtureStatus::Xfail | FixtureStatus::Skip)
        && reason.as_deref().unwrap_or("").is_empty()
    {
        panic!("non-active fixture missing reason in {path:?}");
    }
    if lines.is_empty() {
        panic!("expected file {path:?} has no lines");
    }

    ExpectedLines {
        status,
        reason,
        lines,
    }
}
