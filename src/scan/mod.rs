//! Directory scanning for deletion candidates

use crate::domain::{PatternSet, ScanResult};
use std::path::Path;

pub mod scanner;

pub use scanner::FileScanner;

/// Run a single scan with a scanner built from `patterns` and default settings.
pub fn scan_directory<P: AsRef<Path>>(
    root: P,
    patterns: &PatternSet,
    recursive: bool,
) -> ScanResult {
    FileScanner::new(patterns.clone()).scan(root.as_ref(), recursive)
}
