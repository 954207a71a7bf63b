//! Detail overlay state.
//!
//! Kept apart from [`PageState`](crate::pager::PageState): opening or closing
//! the overlay never touches the page being shown, and a page change never
//! touches the overlay.

use crate::remote::Repository;

/// Which repository the detail overlay shows, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Repository>,
    open: bool,
}

impl Selection {
    pub fn open(&mut self, repository: Repository) {
        self.selected = Some(repository);
        self.open = true;
    }

    /// Close the overlay and forget the repository
    pub fn close(&mut self) {
        self.selected = None;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&Repository> {
        self.selected.as_ref().filter(|_| self.open)
    }
}
