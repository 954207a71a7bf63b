//! Columns of the repository table

use crate::remote::Repository;
use crate::tui::components::table::{Cell, Column, ColumnWidth};
use crate::tui::theme::theme;

const ELLIPSIS: &str = "...";
const MORE_MARKER: &str = "[more]";

/// Options that change how the description column renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Characters kept before truncating
    pub description_preview: usize,
    /// Truncate long descriptions and mark them as expandable
    pub view_more: bool,
}

/// `[T]` for owner `torvalds`; the terminal stand-in for an avatar image
pub fn avatar_initial(login: &str) -> String {
    match login.chars().next() {
        Some(c) => format!("[{}]", c.to_uppercase()),
        None => "[?]".to_string(),
    }
}

pub fn stars_label(count: u64) -> String {
    format!("★ {count}")
}

/// Cut `text` to `preview` characters.
///
/// Returns the preview and whether anything was cut.
pub fn truncate_description(text: &str, preview: usize) -> (String, bool) {
    match text.char_indices().nth(preview) {
        Some((byte_index, _)) => (format!("{}{ELLIPSIS}", &text[..byte_index]), true),
        None => (text.to_string(), false),
    }
}

/// Description cell text for a repository
pub fn description_text(repository: &Repository, options: ColumnOptions) -> String {
    let Some(description) = repository
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    else {
        return repository.description_or_placeholder().to_string();
    };

    if !options.view_more {
        return description.to_string();
    }

    match truncate_description(description, options.description_preview) {
        (preview, true) => format!("{preview} {MORE_MARKER}"),
        (full, false) => full,
    }
}

/// Avatar, Owner, Repository, Description, Stars
pub fn repository_columns<'a>(options: ColumnOptions) -> Vec<Column<'a, Repository>> {
    let theme = theme();
    vec![
        Column::new("Avatar", ColumnWidth::Fixed(8), move |r: &Repository| {
            Cell::new(avatar_initial(&r.owner.login)).colored(theme.avatar)
        }),
        Column::new("Owner", ColumnWidth::Fixed(20), move |r: &Repository| {
            Cell::new(r.owner.login.clone()).colored(theme.owner)
        }),
        Column::new("Repository", ColumnWidth::Fixed(28), move |r: &Repository| {
            Cell::new(r.name.clone()).colored(theme.repo_name).bold()
        }),
        Column::new("Description", ColumnWidth::Flex(1.0), move |r: &Repository| {
            let cell = Cell::new(description_text(r, options));
            if r.description.is_none() {
                cell.colored(theme.text_dimmed)
            } else {
                cell
            }
        }),
        Column::new("Stars", ColumnWidth::Fixed(10), move |r: &Repository| {
            Cell::new(stars_label(r.stargazers_count)).colored(theme.stars)
        }),
    ]
}
