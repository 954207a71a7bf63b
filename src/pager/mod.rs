//! Pagination controller for the repository list.
//!
//! [`Pager`] holds the fixed paging parameters (page size, result window,
//! error policy). [`PageState`] is the single mutable container for the page
//! being shown; it is owned by the browse view and changed only through the
//! methods here.
//!
//! Every fetch the state issues is identified by a [`PageRequest`] carrying a
//! monotonically increasing sequence number. Only the outcome of the latest
//! request is applied, so a slow response for a page the user already left
//! cannot overwrite the page they are looking at.

use crate::remote::{FetchError, MAX_WINDOW, PAGE_SIZE, Repository, SearchPage, SearchProvider};

/// Message shown to the user for any failed page load
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch repositories";

/// Load lifecycle of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What happens to the visible rows when a page fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    #[default]
    ClearItems,
    RetainItems,
}

/// Page navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    First,
    Previous,
    Next,
    Last,
}

impl Nav {
    pub const ALL: [Nav; 4] = [Nav::First, Nav::Previous, Nav::Next, Nav::Last];

    pub fn label(self) -> &'static str {
        match self {
            Nav::First => "First",
            Nav::Previous => "Previous",
            Nav::Next => "Next",
            Nav::Last => "Last",
        }
    }
}

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub seq: u64,
}

/// A finished fetch, ready to be applied to a [`PageState`]
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub request: PageRequest,
    pub result: Result<SearchPage, FetchError>,
}

/// Result of applying an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Loaded,
    Failed,
    /// A newer request was issued since; the outcome was discarded
    Stale,
}

/// `ceil(total_count / page_size)`
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total_count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// Fixed paging parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: u32,
    max_window: u64,
    on_error: ErrorPolicy,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_window: MAX_WINDOW,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Pager {
    pub fn new(page_size: u32, max_window: u64) -> Self {
        Self {
            page_size,
            max_window,
            on_error: ErrorPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_window(&self) -> u64 {
        self.max_window
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.on_error
    }

    /// Server-reported total, capped to what the API will paginate into
    pub fn clamp_total(&self, server_total: u64) -> u64 {
        server_total.min(self.max_window)
    }

    pub fn total_pages(&self, total_count: u64) -> u32 {
        total_pages(total_count, self.page_size)
    }

    /// Deepest page the API will ever serve
    pub fn max_pages(&self) -> u32 {
        self.total_pages(self.max_window)
    }
}

/// The page currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current_page: u32,
    items: Vec<Repository>,
    total_count: u64,
    phase: Phase,
    error: Option<String>,
    last_seq: u64,
    latest: Option<PageRequest>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items: Vec::new(),
            total_count: 0,
            phase: Phase::Idle,
            error: None,
            last_seq: 0,
            latest: None,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items(&self) -> &[Repository] {
        &self.items
    }

    /// Clamped total; never above the pager's window
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The most recently issued request
    pub fn latest_request(&self) -> Option<PageRequest> {
        self.latest
    }

    pub fn total_pages(&self, pager: &Pager) -> u32 {
        pager.total_pages(self.total_count)
    }

    pub fn is_valid_page(&self, pager: &Pager, page: u32) -> bool {
        page >= 1 && page <= self.total_pages(pager)
    }

    /// Initial load of page 1
    pub fn mount(&mut self) -> PageRequest {
        self.issue(1)
    }

    /// Move to `page` and start loading it.
    ///
    /// Returns `None` and leaves the state untouched unless
    /// `1 <= page <= total_pages`. Requesting the current page reloads it.
    pub fn request_page(&mut self, pager: &Pager, page: u32) -> Option<PageRequest> {
        if !self.is_valid_page(pager, page) {
            tracing::debug!(page, total_pages = self.total_pages(pager), "ignoring out-of-range page");
            return None;
        }
        Some(self.issue(page))
    }

    /// Reload the current page regardless of the known total.
    ///
    /// This is the way out of a failed first load, where no total is known
    /// and therefore no page is navigable.
    pub fn refresh(&mut self) -> PageRequest {
        self.issue(self.current_page)
    }

    /// Target page for a navigation control, or `None` when the control is
    /// disabled
    pub fn nav_target(&self, pager: &Pager, nav: Nav) -> Option<u32> {
        let total = self.total_pages(pager);
        if total == 0 {
            return None;
        }
        let current = self.current_page;
        let target = match nav {
            Nav::First => 1,
            Nav::Previous => current.checked_sub(1)?,
            Nav::Next => current.checked_add(1)?,
            Nav::Last => total,
        };
        (target != current && target >= 1 && target <= total).then_some(target)
    }

    pub fn nav_enabled(&self, pager: &Pager, nav: Nav) -> bool {
        self.nav_target(pager, nav).is_some()
    }

    pub fn navigate(&mut self, pager: &Pager, nav: Nav) -> Option<PageRequest> {
        let target = self.nav_target(pager, nav)?;
        self.request_page(pager, target)
    }

    fn issue(&mut self, page: u32) -> PageRequest {
        self.last_seq += 1;
        let request = PageRequest {
            page,
            seq: self.last_seq,
        };
        self.current_page = page;
        self.phase = Phase::Loading;
        self.error = None;
        self.latest = Some(request);
        request
    }

    /// Apply a finished fetch.
    ///
    /// Outcomes for anything but the latest still-loading request are
    /// discarded. Failures are logged with their cause; the state only keeps
    /// the fixed user-facing message.
    pub fn apply(&mut self, pager: &Pager, outcome: PageOutcome) -> Applied {
        let PageOutcome { request, result } = outcome;

        if self.latest != Some(request) || self.phase != Phase::Loading {
            tracing::debug!(
                page = request.page,
                seq = request.seq,
                latest_seq = self.last_seq,
                "discarding superseded page result"
            );
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                self.total_count = pager.clamp_total(page.total_count);
                self.items = page.items;
                self.error = None;
                self.phase = Phase::Loaded;
                tracing::info!(
                    page = request.page,
                    items = self.items.len(),
                    total_count = self.total_count,
                    "page loaded"
                );
                Applied::Loaded
            }
            Err(err) => {
                tracing::error!(page = request.page, status = ?err.status, "{err}");
                if pager.error_policy() == ErrorPolicy::ClearItems {
                    self.items.clear();
                }
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.phase = Phase::Failed;
                Applied::Failed
            }
        }
    }
}

/// Run one issued request against a provider
pub async fn fetch<P: SearchProvider>(provider: &P, request: PageRequest) -> PageOutcome {
    let result = provider.fetch_page(request.page).await;
    PageOutcome { request, result }
}
