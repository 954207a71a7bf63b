//! `config show` and `config path`

use std::path::Path;

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{Result, StargazeError};

/// Print the effective configuration as YAML
pub fn cmd_config_show(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Print where the configuration file is read from
pub fn cmd_config_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().ok_or_else(|| {
            StargazeError::Config("no configuration directory on this platform".to_string())
        })?,
    };

    if path.exists() {
        println!("{}", path.display());
    } else {
        println!("{} {}", path.display(), "(not created, using defaults)".dimmed());
    }
    Ok(())
}
