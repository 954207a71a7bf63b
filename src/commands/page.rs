//! `page <N>`: fetch and print one page of results

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Config;
use crate::error::{Result, StargazeError};
use crate::pager::Pager;
use crate::remote::{GitHubSearchClient, Repository, SearchProvider};
use crate::tui::browse::columns::{stars_label, truncate_description};

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "#")]
    rank: u64,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Repository")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Stars")]
    stars: String,
}

#[derive(Serialize)]
struct PageJson<'a> {
    page: u32,
    total_pages: u32,
    total_count: u64,
    items: &'a [Repository],
}

/// Render a page as a table; ranks continue across pages
pub fn format_page_table(items: &[Repository], page: u32, page_size: u32, preview: usize) -> String {
    let first_rank = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
    let rows = items.iter().enumerate().map(|(i, repo)| PageRow {
        rank: first_rank + i as u64,
        owner: repo.owner.login.clone(),
        name: repo.name.clone(),
        description: truncate_description(repo.description_or_placeholder(), preview).0,
        stars: stars_label(repo.stargazers_count),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Fetch one page and print it
pub async fn cmd_page(config: &Config, page: u32, json: bool) -> Result<()> {
    let client = GitHubSearchClient::from_config(config)?;
    print!("{}", render_page(&client, config, page, json).await?);
    Ok(())
}

/// Fetch `page` from `provider` and render it as a table or JSON.
///
/// Pages past the search window are rejected before any request. Pages past
/// the reported total are rejected once the total is known; a search with no
/// results only has page 1.
pub async fn render_page<P: SearchProvider>(
    provider: &P,
    config: &Config,
    page: u32,
    json: bool,
) -> Result<String> {
    let pager = Pager::default();
    let max = pager.max_pages();
    if page == 0 || page > max {
        return Err(StargazeError::PageOutOfRange { page, max });
    }

    let result = provider.fetch_page(page).await?;
    let total_count = pager.clamp_total(result.total_count);
    let total_pages = pager.total_pages(total_count);

    let last_page = total_pages.max(1);
    if page > last_page {
        tracing::warn!(page, total_count, "requested page past the last result");
        return Err(StargazeError::PageOutOfRange {
            page,
            max: last_page,
        });
    }

    if json {
        let output = PageJson {
            page,
            total_pages,
            total_count,
            items: &result.items,
        };
        return Ok(format!("{}\n", serde_json::to_string_pretty(&output)?));
    }

    let body = if result.items.is_empty() {
        let message = config.search.window().empty_message().yellow().to_string();
        if total_pages == 0 {
            return Ok(format!("{message}\n"));
        }
        message
    } else {
        format_page_table(
            &result.items,
            page,
            pager.page_size(),
            config.display.description_preview,
        )
    };
    Ok(format!(
        "{body}\n{}\n",
        format!("Page {page} of {total_pages}").dimmed()
    ))
}
