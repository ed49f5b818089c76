//! Core data types shared by the scanner and the renderers.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use thiserror::Error;

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "test";

/// Ordered, immutable set of case-insensitive substrings matched against file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
    lowered: Vec<String>,
}

impl PatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let lowered = patterns.iter().map(|p| p.to_lowercase()).collect();
        Self { patterns, lowered }
    }

    /// Patterns in the order they were given, original casing preserved.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether `file_name` contains any pattern, ignoring case.
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.lowered.iter().any(|pattern| name.contains(pattern.as_str()))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new([DEFAULT_PATTERN])
    }
}

/// Reasons a scan cannot start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    PathNotDirectory(PathBuf),
}

/// Counts and matches from a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub suggestions: Vec<String>,
    pub total_scanned: usize,
    /// Entries the walker could not read (permission denied, symlink loops).
    pub entries_skipped: usize,
}

impl ScanSummary {
    pub fn suggested_count(&self) -> usize {
        self.suggestions.len()
    }
}

/// Outcome of a single scan call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanResult {
    Failed(ScanError),
    Completed(ScanSummary),
}

impl ScanResult {
    pub fn error(&self) -> Option<&ScanError> {
        match self {
            Self::Failed(err) => Some(err),
            Self::Completed(_) => None,
        }
    }

    pub fn summary(&self) -> Option<&ScanSummary> {
        match self {
            Self::Failed(_) => None,
            Self::Completed(summary) => Some(summary),
        }
    }

    /// Suggested paths; empty for failed scans.
    pub fn suggestions(&self) -> &[String] {
        self.summary().map(|s| s.suggestions.as_slice()).unwrap_or(&[])
    }

    pub fn total_scanned(&self) -> usize {
        self.summary().map_or(0, |s| s.total_scanned)
    }

    pub fn suggested_count(&self) -> usize {
        self.suggestions().len()
    }

    pub fn entries_skipped(&self) -> usize {
        self.summary().map_or(0, |s| s.entries_skipped)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Settings read from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "string_or_list")]
    pub patterns: Vec<String>,
    pub recursive: bool,
    pub follow_symlinks: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patterns: vec![DEFAULT_PATTERN.to_string()],
            recursive: true,
            follow_symlinks: false,
        }
    }
}

impl Config {
    pub fn pattern_set(&self) -> PatternSet {
        PatternSet::new(self.patterns.iter().cloned())
    }
}

/// Accept either `["a", "b"]` or `"a, b"`.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        String(String),
        List(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect(),
        StringOrList::List(items) => items,
    })
}
