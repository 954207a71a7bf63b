use thiserror::Error;

use crate::remote::error::FetchError;

#[derive(Error, Debug)]
pub enum StargazeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("page {page} is out of range (valid pages: 1-{max})")]
    PageOutOfRange { page: u32, max: u32 },

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, StargazeError>;
