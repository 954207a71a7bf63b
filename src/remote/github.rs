//! GitHub repository search client.

use reqwest::{Client, header};
use url::Url;

use crate::config::Config;
use crate::error::{Result, StargazeError};

use super::error::FetchError;
use super::schema::decode_search_page;
use super::{SearchPage, SearchProvider, SearchQuery};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("stargaze/", env!("CARGO_PKG_VERSION"));

/// Issues repository search requests against a GitHub-compatible API
#[derive(Debug, Clone)]
pub struct GitHubSearchClient {
    client: Client,
    endpoint: Url,
    query: SearchQuery,
}

impl GitHubSearchClient {
    /// Create a client for the given API base URL and fixed query
    pub fn new(api_url: &str, query: SearchQuery) -> Result<Self> {
        let endpoint = search_endpoint(api_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            query,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url, config.search_query()?)
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Full request URL for a page
    pub fn request_url(&self, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.query.params(page));
        url
    }
}

impl SearchProvider for GitHubSearchClient {
    async fn fetch_page(&self, page: u32) -> std::result::Result<SearchPage, FetchError> {
        let url = self.request_url(page);
        tracing::debug!(page, %url, "requesting search page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::from_response_body(status, &body));
        }

        let page_data = decode_search_page(&body)?;
        tracing::debug!(
            page,
            items = page_data.items.len(),
            total_count = page_data.total_count,
            "search page received"
        );
        Ok(page_data)
    }
}

/// `{api_url}/search/repositories`, tolerating a missing trailing slash on
/// base URLs with a path (GitHub Enterprise `/api/v3`)
fn search_endpoint(api_url: &str) -> Result<Url> {
    let mut base = api_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = Url::parse(&base)
        .map_err(|e| StargazeError::Config(format!("invalid api_url '{api_url}': {e}")))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(StargazeError::Config(format!(
            "invalid api_url '{api_url}': expected an http(s) URL"
        )));
    }
    base.join("search/repositories")
        .map_err(|e| StargazeError::Config(format!("invalid api_url '{api_url}': {e}")))
}
