//! Repository browser
//!
//! One page of search results in a table, page navigation controls, and a
//! detail overlay for the highlighted repository.

pub mod columns;
pub mod components;
pub mod model;
pub mod selection;
pub mod view;

pub use model::{
    BrowseAction, BrowseSettings, BrowseState, BrowseViewModel, Effect, ListBody,
    compute_view_model, key_to_action, reduce_browse_state,
};
pub use selection::Selection;
pub use view::{BrowseApp, BrowseAppProps};
