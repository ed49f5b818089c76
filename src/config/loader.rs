//! Config file loading

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Section name that may wrap the settings in a shared config file.
const SECTION: &str = "file-cleaner";

const CANDIDATES: &[&str] = &[
    "file-cleaner.toml",
    ".file-cleaner.toml",
    "file-cleaner.yml",
    ".file-cleaner.yml",
    "file-cleaner.yaml",
    ".file-cleaner.yaml",
];

/// Load config from `config_path`, or discover one inside `scan_root`.
///
/// An explicitly given file must parse; a discovered file that does not is
/// logged and replaced by defaults.
pub fn load_config(scan_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(scan_root),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = match fs::read_to_string(&config_file) {
        Ok(content) => content,
        Err(e) if config_path_provided => {
            return Err(e)
                .with_context(|| format!("Failed reading config file: {}", config_file.display()))
        }
        Err(e) => {
            tracing::warn!("Failed reading config file {}: {}", config_file.display(), e);
            return Ok(Config::default());
        }
    };

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse TOML config, supporting a nested `[file-cleaner]` section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested `file-cleaner` mapping.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    // An empty file parses to null
    if config_val.is_null() {
        return Ok(Config::default());
    }

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(scan_root: &Path) -> Option<PathBuf> {
    if !scan_root.is_dir() {
        return None;
    }
    CANDIDATES.iter().map(|candidate| scan_root.join(candidate)).find(|path| path.is_file())
}
