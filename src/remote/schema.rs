//! Wire schema for `GET /search/repositories` and its normalization.
//!
//! The wire types accept any subset of the documented fields. Normalization
//! turns them into [`SearchPage`] with these rules:
//! - absent or null `items` becomes an empty list
//! - absent or null `total_count` becomes 0
//! - an item without `id`, `owner.login`, `name` or `html_url` is dropped
//! - a missing avatar becomes an empty string, missing stars become 0

use serde::Deserialize;

use super::error::FetchError;
use super::{Owner, Repository, SearchPage};

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    /// Kept as raw values so one malformed item does not fail the page
    #[serde(default)]
    pub items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOwner {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRepository {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub owner: Option<RawOwner>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl RawRepository {
    /// Convert into a [`Repository`], or name the first missing required field
    pub fn into_repository(self) -> std::result::Result<Repository, &'static str> {
        let id = self.id.ok_or("id")?;
        let owner = self.owner.ok_or("owner")?;
        let login = owner.login.filter(|l| !l.is_empty()).ok_or("owner.login")?;
        let name = self.name.filter(|n| !n.is_empty()).ok_or("name")?;
        let html_url = self.html_url.filter(|u| !u.is_empty()).ok_or("html_url")?;

        Ok(Repository {
            id,
            owner: Owner {
                login,
                avatar_url: owner.avatar_url.unwrap_or_default(),
            },
            name,
            description: self.description,
            stargazers_count: self.stargazers_count.unwrap_or(0),
            html_url,
        })
    }
}

impl SearchResponse {
    pub fn normalize(self) -> SearchPage {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let raw = match serde_json::from_value::<RawRepository>(value) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!(index, "dropping undecodable search item: {e}");
                        return None;
                    }
                };
                match raw.into_repository() {
                    Ok(repo) => Some(repo),
                    Err(field) => {
                        tracing::warn!(index, field, "dropping search item missing a field");
                        None
                    }
                }
            })
            .collect();

        SearchPage {
            items,
            total_count: self.total_count.unwrap_or(0),
        }
    }
}

/// Decode a response body into a normalized page
pub fn decode_search_page(body: &str) -> std::result::Result<SearchPage, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::decode("expected a JSON object"));
    }
    let response: SearchResponse = serde_json::from_value(value)?;
    Ok(response.normalize())
}
