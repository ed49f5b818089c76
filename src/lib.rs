//! Scan directory trees and suggest files to delete by name pattern.
//!
//! ```no_run
//! use file_cleaning_agent::{format_report, FileScanner, PatternSet};
//! use std::path::Path;
//!
//! let scanner = FileScanner::new(PatternSet::new(["test", "backup"]));
//! let result = scanner.scan(Path::new("."), true);
//! println!("{}", format_report(&result));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod scan;

pub use domain::{Config, PatternSet, ScanError, ScanResult, ScanSummary};
pub use render::{format_report, render_json};
pub use scan::{scan_directory, FileScanner};
