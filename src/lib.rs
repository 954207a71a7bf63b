pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod pager;
pub mod remote;
pub mod tui;

pub use config::Config;
pub use error::{Result, StargazeError};
pub use pager::{Nav, PageState, Pager};
pub use remote::{GitHubSearchClient, Repository, SearchPage, SearchProvider};
