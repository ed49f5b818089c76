//! Command-line interface for file-cleaner
//!
//! Scans a directory, suggests files to delete and prints the report.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::render::{format_report, render_json};
use crate::scan::FileScanner;

/// File Cleaning Agent - Suggests files to delete based on patterns
#[derive(Parser)]
#[command(name = "file-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory path to scan (absolute or relative path)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Patterns to match for deletion suggestions (default: test)
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub patterns: Option<Vec<String>>,

    /// Don't scan subdirectories recursively
    #[arg(long)]
    pub no_recursive: bool,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Path to config file (file-cleaner.toml or .file-cleaner.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, decides the filter; otherwise --verbose picks DEBUG over WARN.
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::default().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::default().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let config = load_config(&cli.path, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            patterns: cli.patterns,
            no_recursive: cli.no_recursive,
            follow_symlinks: cli.follow_symlinks,
        },
    );
    if config.patterns.is_empty() {
        tracing::warn!("No patterns configured; no files will be suggested");
    }
    tracing::debug!(
        "Scanning {} with patterns {:?} (recursive: {})",
        cli.path.display(),
        config.patterns,
        config.recursive
    );

    let scanner = FileScanner::new(config.pattern_set()).follow_symlinks(config.follow_symlinks);
    let result = scanner.scan(&cli.path, config.recursive);

    // Scan errors are part of the report; the process still exits 0.
    let output = match cli.format {
        OutputFormat::Text => format_report(&result),
        OutputFormat::Json => render_json(&result)?,
    };
    println!("{}", output);

    Ok(())
}
