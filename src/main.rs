//! file-cleaner: suggest files to delete based on name patterns
//!
//! Scans a directory tree and reports files whose names contain any of the
//! configured patterns. Nothing is ever deleted.

use anyhow::Result;

fn main() -> Result<()> {
    file_cleaning_agent::cli::run()
}
