//! Builders for test repositories and a scripted search provider.

use std::collections::HashMap;
use std::sync::Mutex;

use stargaze::remote::{FetchError, Owner, Repository, SearchPage, SearchProvider};

/// Builder for creating test repositories
pub struct RepositoryBuilder {
    repository: Repository,
}

impl RepositoryBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            repository: Repository {
                id,
                owner: Owner {
                    login: format!("owner{id}"),
                    avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
                },
                name: format!("repo{id}"),
                description: Some(format!("Repository number {id}")),
                stargazers_count: 10_000u64.saturating_sub(id),
                html_url: format!("https://github.com/owner{id}/repo{id}"),
            },
        }
    }

    pub fn owner(mut self, login: &str) -> Self {
        self.repository.owner.login = login.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.repository.name = name.to_string();
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.repository.description = description.map(str::to_string);
        self
    }

    pub fn stars(mut self, stars: u64) -> Self {
        self.repository.stargazers_count = stars;
        self
    }

    pub fn build(self) -> Repository {
        self.repository
    }
}

pub fn mock_repo(id: u64) -> Repository {
    RepositoryBuilder::new(id).build()
}

/// `count` repositories with consecutive ids starting at `first_id`
pub fn mock_page(first_id: u64, count: usize, total_count: u64) -> SearchPage {
    SearchPage {
        items: (first_id..first_id + count as u64).map(mock_repo).collect(),
        total_count,
    }
}

/// Provider answering from a fixed script of pages; unscripted pages fail
#[derive(Default)]
pub struct FakeProvider {
    pages: HashMap<u32, Result<SearchPage, FetchError>>,
    calls: Mutex<Vec<u32>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, result: SearchPage) -> Self {
        self.pages.insert(page, Ok(result));
        self
    }

    pub fn with_error(mut self, page: u32, error: FetchError) -> Self {
        self.pages.insert(page, Err(error));
        self
    }

    /// Pages requested so far, in order
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl SearchProvider for FakeProvider {
    async fn fetch_page(&self, page: u32) -> Result<SearchPage, FetchError> {
        self.calls.lock().expect("calls lock poisoned").push(page);
        self.pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::transport(format!("no page {page} scripted"))))
    }
}
