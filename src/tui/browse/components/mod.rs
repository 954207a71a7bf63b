//! Browse view sub-components

pub mod detail_modal;
pub mod header;
pub mod list_body;
pub mod nav_bar;
pub mod shortcut_bar;

pub use detail_modal::{DetailModal, DetailModalProps};
pub use header::{BrowseHeader, BrowseHeaderProps};
pub use list_body::{ListBodyView, ListBodyViewProps};
pub use nav_bar::{NavBar, NavBarProps};
pub use shortcut_bar::{ShortcutBar, ShortcutBarProps};
