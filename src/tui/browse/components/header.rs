//! Title bar and error banner

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct BrowseHeaderProps {
    pub title: String,
    /// Shown on a red line under the title when set
    pub error: Option<String>,
}

#[component]
pub fn BrowseHeader(props: &BrowseHeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column, flex_shrink: 0.0) {
            View(
                width: 100pct,
                height: 1,
                justify_content: JustifyContent::Center,
                background_color: theme.highlight,
            ) {
                Text(content: props.title.clone(), color: theme.text, weight: Weight::Bold)
            }
            #(props.error.clone().map(|error| element! {
                View(width: 100pct, height: 1, justify_content: JustifyContent::Center) {
                    Text(content: error, color: theme.error, weight: Weight::Bold)
                }
            }))
        }
    }
}
