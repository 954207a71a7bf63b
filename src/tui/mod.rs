//! Terminal user interface
//!
//! - `browse` - paginated repository browser with a detail overlay
//! - `components` - modal and table building blocks

pub mod browse;
pub mod components;
pub mod theme;

pub use browse::{BrowseApp, BrowseAppProps, BrowseSettings};
pub use theme::Theme;
