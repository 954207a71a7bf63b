//! Tracing subscriber initialization.
//!
//! The filter comes from `STARGAZE_LOG`, then `RUST_LOG`, then defaults to
//! `warn`. The browse TUI owns the terminal, so it logs to a file; the
//! one-shot commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, StargazeError};

pub const LOG_ENV: &str = "STARGAZE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File target in the platform data directory, falling back to stderr
    pub fn for_tui() -> Self {
        match default_log_path() {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        }
    }
}

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "stargaze", "stargaze")
        .map(|dirs| dirs.data_local_dir().join("stargaze.log"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
pub fn init(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .map_err(|e| StargazeError::Logging(e.to_string())),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| StargazeError::Logging(e.to_string()))
        }
    }
}
