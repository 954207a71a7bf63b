//! Application configuration.
//!
//! Configuration is read from `config.yaml` in the platform configuration
//! directory (or the path given with `--config`) and includes:
//! - The search API base URL
//! - The search cutoff (explicit date or a trailing window of days)
//! - Display options for the browse view
//!
//! A missing file yields the defaults. `STARGAZE_API_URL` overrides the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StargazeError};
use crate::remote::SearchQuery;
use crate::remote::github::DEFAULT_API_URL;
use crate::remote::query::cutoff_from_window;

/// Environment variable overriding `api_url`
pub const API_URL_ENV: &str = "STARGAZE_API_URL";

const DEFAULT_WINDOW_DAYS: u32 = 10;
const DEFAULT_DESCRIPTION_PREVIEW: usize = 100;
const MAX_WINDOW_DAYS: u32 = 36_500;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub api_url: String,

    /// Search criterion
    pub search: SearchConfig,

    /// Browse view options
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search: SearchConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Which repositories to search for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Fixed cutoff date; takes precedence over `window_days`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<Date>,

    /// Search repositories created in the last N days
    pub window_days: u32,
}

/// Human-facing description of the search cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchWindow {
    LastDays(u32),
    CreatedAfter(Date),
}

impl SearchWindow {
    /// Suffix for the view title, e.g. `Last 10 Days`
    pub fn title(&self) -> String {
        match self {
            SearchWindow::LastDays(1) => "Last Day".to_string(),
            SearchWindow::LastDays(days) => format!("Last {days} Days"),
            SearchWindow::CreatedAfter(date) => format!("Created After {date}"),
        }
    }

    /// Message shown when a page comes back with no repositories
    pub fn empty_message(&self) -> String {
        match self {
            SearchWindow::LastDays(1) => "No repositories found for the last day.".to_string(),
            SearchWindow::LastDays(days) => {
                format!("No repositories found for the last {days} days.")
            }
            SearchWindow::CreatedAfter(date) => {
                format!("No repositories found created after {date}.")
            }
        }
    }
}

impl SearchConfig {
    pub fn window(&self) -> SearchWindow {
        match self.created_after {
            Some(date) => SearchWindow::CreatedAfter(date),
            None => SearchWindow::LastDays(self.window_days),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            created_after: None,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

/// Browse view behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Characters of description shown in the table before truncating
    pub description_preview: usize,

    /// Truncate long descriptions and allow opening the detail overlay
    pub view_more: bool,

    /// Keep the previous page's rows visible when a page fails to load
    pub retain_items_on_error: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            description_preview: DEFAULT_DESCRIPTION_PREVIEW,
            view_more: true,
            retain_items_on_error: false,
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stargaze", "stargaze")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load from `path` (or the default location), then apply environment
    /// overrides and validate
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => Config::default(),
            },
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file, or return the defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_url = url.trim().to_string();
        }
    }

    /// Reject values the browse view cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(StargazeError::Config("api_url cannot be empty".to_string()));
        }
        if self.display.description_preview == 0 {
            return Err(StargazeError::Config(
                "display.description_preview must be at least 1".to_string(),
            ));
        }
        if self.search.window_days > MAX_WINDOW_DAYS {
            return Err(StargazeError::Config(format!(
                "search.window_days must be at most {MAX_WINDOW_DAYS}"
            )));
        }
        Ok(())
    }

    /// Cutoff date relative to today
    pub fn cutoff_date(&self) -> Result<Date> {
        self.cutoff_date_on(jiff::Zoned::now().date())
    }

    /// Cutoff date relative to a given day
    pub fn cutoff_date_on(&self, today: Date) -> Result<Date> {
        match self.search.created_after {
            Some(date) => Ok(date),
            None => cutoff_from_window(today, self.search.window_days),
        }
    }

    /// The fixed query the search client is built with
    pub fn search_query(&self) -> Result<SearchQuery> {
        Ok(SearchQuery::created_after(self.cutoff_date()?))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
