//! First / Previous / page indicator / Next / Last controls

use iocraft::prelude::*;

use crate::pager::Nav;
use crate::tui::browse::model::NavViewModel;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct NavBarProps {
    pub nav: NavViewModel,
}

fn key_hint(nav: Nav) -> &'static str {
    match nav {
        Nav::First => "g",
        Nav::Previous => "h",
        Nav::Next => "l",
        Nav::Last => "G",
    }
}

fn control(nav: Nav, enabled: bool) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(
            padding_left: 1,
            padding_right: 1,
            border_style: BorderStyle::Round,
            border_color: if enabled { theme.border_focused } else { theme.disabled },
        ) {
            Text(
                content: format!("{} {}", key_hint(nav), nav.label()),
                color: if enabled { theme.text } else { theme.disabled },
            )
        }
    }
    .into_any()
}

#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let nav = &props.nav;

    if !nav.visible {
        return element!(View(height: 0)).into_any();
    }

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            column_gap: 1,
        ) {
            #(Some(control(Nav::First, nav.first)))
            #(Some(control(Nav::Previous, nav.previous)))
            View(padding_left: 1, padding_right: 1) {
                Text(content: nav.indicator.clone(), color: theme.text, weight: Weight::Bold)
            }
            #(Some(control(Nav::Next, nav.next)))
            #(Some(control(Nav::Last, nav.last)))
        }
    }
    .into_any()
}
