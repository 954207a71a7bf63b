//! Command implementations

mod browse;
mod config;
mod page;

pub use browse::cmd_browse;
pub use config::{cmd_config_path, cmd_config_show};
pub use page::{cmd_page, format_page_table, render_page};

use std::path::Path;

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::error::Result;

/// Resolve configuration and apply command-line search overrides
pub fn load_config(path: Option<&Path>, search: &SearchArgs) -> Result<Config> {
    let mut config = Config::resolve(path)?;
    search.apply(&mut config);
    config.validate()?;
    Ok(config)
}
