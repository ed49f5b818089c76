//! Directory scanner that flags files by name pattern

use crate::domain::{PatternSet, ScanError, ScanResult, ScanSummary};
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Scanner that walks a directory and suggests files whose names match a [`PatternSet`].
///
/// The pattern set is fixed when the scanner is built; each call to [`FileScanner::scan`]
/// starts a fresh traversal and returns a new [`ScanResult`].
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    patterns: PatternSet,
    follow_symlinks: bool,
}

impl FileScanner {
    /// Create a scanner with the given patterns and default settings.
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns, follow_symlinks: false }
    }

    /// Set whether to descend into symlinked directories
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Scan `path` and collect files whose base name matches a pattern.
    ///
    /// A missing path or a non-directory is reported as [`ScanResult::Failed`].
    /// Unreadable entries met during the walk are logged and skipped.
    pub fn scan(&self, path: &Path, recursive: bool) -> ScanResult {
        if !path.exists() {
            return ScanResult::Failed(ScanError::PathNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return ScanResult::Failed(ScanError::PathNotDirectory(path.to_path_buf()));
        }

        let mut walker =
            WalkDir::new(path).min_depth(1).follow_links(self.follow_symlinks).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut summary = ScanSummary::default();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    summary.entries_skipped += 1;
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }
            summary.total_scanned += 1;

            if self.should_suggest(&entry) {
                tracing::debug!("Suggesting {}", entry.path().display());
                summary.suggestions.push(display_path(entry.path()));
            }
        }

        tracing::info!(
            "Scanned {} files under {}, {} suggested",
            summary.total_scanned,
            path.display(),
            summary.suggested_count()
        );

        ScanResult::Completed(summary)
    }

    fn should_suggest(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.patterns.matches(&name)
    }
}

/// Render `path` without `.` components, so `./a/./b.txt` becomes `a/b.txt`.
fn display_path(path: &Path) -> String {
    let cleaned: PathBuf =
        path.components().filter(|component| !matches!(component, Component::CurDir)).collect();
    if cleaned.as_os_str().is_empty() {
        return ".".to_string();
    }
    cleaned.display().to_string()
}

/// Regular files, including symlinks that resolve to one.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && entry.path().is_file()
}
