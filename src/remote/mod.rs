//! Repository search against the GitHub REST API.
//!
//! This module owns the boundary with the upstream search endpoint: the
//! normalized domain types handed to the rest of the crate, the query
//! parameters, the lenient wire schema, and the HTTP client itself.

pub mod error;
pub mod github;
pub mod query;
pub mod schema;

use std::future::Future;

use serde::{Deserialize, Serialize};

pub use error::{FetchError, FetchErrorKind};
pub use github::GitHubSearchClient;
pub use query::{SearchQuery, SortOrder};

/// Number of repositories requested per page
pub const PAGE_SIZE: u32 = 30;

/// Deepest result the search API lets a client paginate into
pub const MAX_WINDOW: u64 = 1000;

/// Repository owner as shown in the list and detail views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    /// Empty when the API omitted it
    pub avatar_url: String,
}

/// A single search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub owner: Owner,
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub html_url: String,
}

impl Repository {
    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }

    /// Description text, or a placeholder when there is none
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description",
        }
    }
}

/// One normalized page of search results.
///
/// `total_count` is the count the server reported. Clamping it to
/// [`MAX_WINDOW`] is the pagination controller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub items: Vec<Repository>,
    pub total_count: u64,
}

/// Source of search result pages.
///
/// The query (criterion, sort key and page size) is fixed when the provider is
/// built; callers only choose which page to read.
pub trait SearchProvider: Send + Sync {
    /// Fetch one 1-based page of results
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = std::result::Result<SearchPage, FetchError>> + Send;
}
