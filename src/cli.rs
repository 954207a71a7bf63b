use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

use crate::config::Config;
use crate::remote::query::parse_date;

#[derive(Parser, Debug)]
#[command(name = "stargaze")]
#[command(about = "Browse the most-starred recently created GitHub repositories")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Browse results in the terminal UI (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print one page of results
    #[command(visible_alias = "p")]
    Page {
        /// Page number, starting at 1
        page: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,
    /// Print the configuration file location
    Path,
}

/// Search cutoff overrides shared by `browse` and `page`
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Repositories created in the last N days
    #[arg(long, value_name = "N", conflicts_with = "created_after")]
    pub days: Option<u32>,

    /// Repositories created after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub created_after: Option<Date>,
}

impl SearchArgs {
    /// Override the configured cutoff
    pub fn apply(&self, config: &mut Config) {
        if let Some(days) = self.days {
            config.search.window_days = days;
            config.search.created_after = None;
        }
        if let Some(date) = self.created_after {
            config.search.created_after = Some(date);
        }
    }
}

fn parse_date_arg(s: &str) -> Result<Date, String> {
    parse_date(s).map_err(|e| e.to_string())
}
