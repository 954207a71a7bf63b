//! Browse view model types for testable state management
//!
//! State ([`BrowseState`]) is separated from the rendered view
//! ([`BrowseViewModel`]). All transitions go through [`reduce_browse_state`],
//! which is pure: work that needs I/O is returned as an [`Effect`] for the
//! component to run.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::config::{Config, SearchWindow};
use crate::pager::{ErrorPolicy, Nav, PageOutcome, PageRequest, PageState, Pager, Phase};
use crate::remote::Repository;
use crate::tui::components::table::{Cell, HeaderCell, headers, render_rows};

use super::columns::{ColumnOptions, repository_columns, stars_label};
use super::selection::Selection;

// ============================================================================
// State Types
// ============================================================================

/// Fixed settings of one browse session
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseSettings {
    pub pager: Pager,
    pub columns: ColumnOptions,
    pub window: SearchWindow,
}

impl BrowseSettings {
    pub fn from_config(config: &Config) -> Self {
        let on_error = if config.display.retain_items_on_error {
            ErrorPolicy::RetainItems
        } else {
            ErrorPolicy::ClearItems
        };
        Self {
            pager: Pager::default().with_error_policy(on_error),
            columns: ColumnOptions {
                description_preview: config.display.description_preview,
                view_more: config.display.view_more,
            },
            window: config.search.window(),
        }
    }
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    /// The page being shown
    pub page: PageState,
    /// Detail overlay
    pub selection: Selection,
    /// Highlighted row within the page
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    pub should_exit: bool,
}

impl BrowseState {
    pub fn highlighted(&self) -> Option<&Repository> {
        if self.page.loading() {
            return None;
        }
        self.page.items().get(self.cursor)
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the browse view
#[derive(Debug, Clone)]
pub enum BrowseAction {
    /// Initial load
    Mount,
    /// One of the four page navigation controls
    Navigate(Nav),
    /// Reload the current page
    Refresh,
    /// A fetch finished
    PageLoaded(PageOutcome),

    MoveUp,
    MoveDown,

    OpenDetail,
    CloseDetail,
    /// Open the highlighted (or overlay) repository in the browser
    OpenInBrowser,

    Quit,
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(PageRequest),
    OpenUrl(String),
}

// ============================================================================
// View Model Types
// ============================================================================

/// One key hint in the shortcut bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

impl Shortcut {
    const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// What fills the list area; exactly one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Loading,
    Table,
    /// Successful load with no rows
    Empty(String),
    /// A failure left no rows; the error banner explains
    Unavailable,
}

/// Page navigation controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavViewModel {
    pub visible: bool,
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
    /// `Page X of Y`
    pub indicator: String,
}

impl NavViewModel {
    pub fn enabled(&self, nav: Nav) -> bool {
        match nav {
            Nav::First => self.first,
            Nav::Previous => self.previous,
            Nav::Next => self.next,
            Nav::Last => self.last,
        }
    }
}

/// Rows and layout for the repository table
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<Cell>>,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

/// Contents of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub full_name: String,
    pub owner: String,
    pub description: String,
    pub stars: String,
    pub avatar_url: String,
    pub html_url: String,
}

impl DetailViewModel {
    fn from_repository(repository: &Repository) -> Self {
        Self {
            full_name: repository.full_name(),
            owner: repository.owner.login.clone(),
            description: repository.description_or_placeholder().to_string(),
            stars: stars_label(repository.stargazers_count),
            avatar_url: repository.owner.avatar_url.clone(),
            html_url: repository.html_url.clone(),
        }
    }
}

/// Computed view model for rendering the browse view
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseViewModel {
    pub title: String,
    /// Fixed failure message, when the last load failed
    pub error_banner: Option<String>,
    pub body: ListBody,
    pub table: TableViewModel,
    pub nav: NavViewModel,
    pub detail: Option<DetailViewModel>,
    /// `BROWSE`, or `DETAIL` while the overlay is open
    pub mode: String,
    pub shortcuts: Vec<Shortcut>,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &BrowseState, settings: &BrowseSettings) -> BrowseViewModel {
    let page = &state.page;
    let pager = &settings.pager;

    let body = match page.phase() {
        Phase::Idle | Phase::Loading => ListBody::Loading,
        _ if !page.items().is_empty() => ListBody::Table,
        Phase::Loaded => ListBody::Empty(settings.window.empty_message()),
        Phase::Failed => ListBody::Unavailable,
    };

    let columns = repository_columns(settings.columns);
    let table = TableViewModel {
        headers: headers(&columns),
        rows: if body == ListBody::Table {
            render_rows(page.items(), &columns)
        } else {
            Vec::new()
        },
        selected: (body == ListBody::Table).then_some(state.cursor),
        scroll_offset: state.scroll_offset,
    };

    let total_pages = page.total_pages(pager);
    let nav = NavViewModel {
        visible: total_pages > 0,
        first: page.nav_enabled(pager, Nav::First),
        previous: page.nav_enabled(pager, Nav::Previous),
        next: page.nav_enabled(pager, Nav::Next),
        last: page.nav_enabled(pager, Nav::Last),
        indicator: format!("Page {} of {}", page.current_page(), total_pages),
    };

    BrowseViewModel {
        title: format!(
            "Most Starred GitHub Repositories ({})",
            settings.window.title()
        ),
        error_banner: page.error().map(str::to_string),
        body,
        table,
        nav,
        detail: state.selection.selected().map(DetailViewModel::from_repository),
        mode: if state.selection.is_open() { "DETAIL" } else { "BROWSE" }.to_string(),
        shortcuts: compute_shortcuts(state, settings),
    }
}

/// Shortcut bar entries for the current mode
pub fn compute_shortcuts(state: &BrowseState, settings: &BrowseSettings) -> Vec<Shortcut> {
    if state.selection.is_open() {
        return vec![
            Shortcut::new("o", "Visit Repository"),
            Shortcut::new("Esc", "Close"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("j/k", "Up/Down"),
        Shortcut::new("h/l", "Prev/Next Page"),
        Shortcut::new("g/G", "First/Last Page"),
        Shortcut::new("r", "Refresh"),
    ];
    if settings.columns.view_more {
        shortcuts.push(Shortcut::new("Enter", "Detail"));
    }
    shortcuts.push(Shortcut::new("o", "Open"));
    shortcuts.push(Shortcut::new("q", "Quit"));
    shortcuts
}

/// Pure function: apply action to state (reducer pattern)
///
/// Page changes and URL opening are not performed here; they come back as an
/// [`Effect`] for the component to run.
pub fn reduce_browse_state(
    mut state: BrowseState,
    action: BrowseAction,
    settings: &BrowseSettings,
    list_height: usize,
) -> (BrowseState, Option<Effect>) {
    let pager = &settings.pager;

    let effect = match action {
        BrowseAction::Mount => match state.page.phase() {
            Phase::Idle => Some(Effect::Fetch(state.page.mount())),
            _ => None,
        },
        BrowseAction::Navigate(nav) => state.page.navigate(pager, nav).map(Effect::Fetch),
        BrowseAction::Refresh => Some(Effect::Fetch(state.page.refresh())),
        BrowseAction::PageLoaded(outcome) => {
            state.page.apply(pager, outcome);
            let last = state.page.items().len().saturating_sub(1);
            state.cursor = state.cursor.min(last);
            state.scroll_offset = adjust_scroll(state.scroll_offset, state.cursor, list_height);
            None
        }

        BrowseAction::MoveUp | BrowseAction::MoveDown if state.page.loading() => None,
        BrowseAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            state.scroll_offset = adjust_scroll(state.scroll_offset, state.cursor, list_height);
            None
        }
        BrowseAction::MoveDown => {
            let count = state.page.items().len();
            if count > 0 {
                state.cursor = (state.cursor + 1).min(count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.cursor, list_height);
            }
            None
        }

        BrowseAction::OpenDetail => {
            if settings.columns.view_more
                && !state.selection.is_open()
                && let Some(repository) = state.highlighted().cloned()
            {
                state.selection.open(repository);
            }
            None
        }
        BrowseAction::CloseDetail => {
            state.selection.close();
            None
        }
        BrowseAction::OpenInBrowser => state
            .selection
            .selected()
            .or_else(|| state.highlighted())
            .map(|repository| Effect::OpenUrl(repository.html_url.clone())),

        BrowseAction::Quit => {
            state.should_exit = true;
            None
        }
    };

    if matches!(effect, Some(Effect::Fetch(_))) {
        state.cursor = 0;
        state.scroll_offset = 0;
    }

    (state, effect)
}

/// Adjust scroll offset to keep the highlighted row visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if selected_index < scroll_offset {
        return selected_index;
    }
    if selected_index >= scroll_offset + list_height {
        return selected_index + 1 - list_height;
    }
    scroll_offset
}

/// Convert a key event to a BrowseAction (pure function)
///
/// The detail overlay captures input while open.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState,
) -> Option<BrowseAction> {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BrowseAction::Quit);
    }
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    if state.selection.is_open() {
        return match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(BrowseAction::CloseDetail),
            KeyCode::Char('o') => Some(BrowseAction::OpenInBrowser),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(BrowseAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowseAction::MoveUp),

        KeyCode::Char('g') | KeyCode::Home => Some(BrowseAction::Navigate(Nav::First)),
        KeyCode::Char('h') | KeyCode::Left => Some(BrowseAction::Navigate(Nav::Previous)),
        KeyCode::Char('l') | KeyCode::Right => Some(BrowseAction::Navigate(Nav::Next)),
        KeyCode::Char('G') | KeyCode::End => Some(BrowseAction::Navigate(Nav::Last)),

        KeyCode::Char('r') => Some(BrowseAction::Refresh),
        KeyCode::Enter => Some(BrowseAction::OpenDetail),
        KeyCode::Char('o') => Some(BrowseAction::OpenInBrowser),

        KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
