//! CLI-over-config precedence

use crate::domain::Config;

/// Values given on the command line that override the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub patterns: Option<Vec<String>>,
    pub no_recursive: bool,
    pub follow_symlinks: bool,
}

/// Merge CLI values over `config`. Flags can only switch their setting on.
pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(patterns) = cli.patterns {
        config.patterns = patterns;
    }
    if cli.no_recursive {
        config.recursive = false;
    }
    if cli.follow_symlinks {
        config.follow_symlinks = true;
    }
    config
}
