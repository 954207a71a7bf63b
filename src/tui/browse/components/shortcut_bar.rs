//! Bottom line: current mode badge followed by the keys that work in it

use iocraft::prelude::*;

use crate::tui::browse::model::Shortcut;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct ShortcutBarProps {
    /// `BROWSE` or `DETAIL`
    pub mode: String,
    pub shortcuts: Vec<Shortcut>,
}

fn entry(index: usize, shortcut: &Shortcut) -> AnyElement<'static> {
    let theme = theme();
    let separator = if index == 0 { "" } else { "  " };
    element! {
        View(flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
            Text(
                content: format!("{separator}{}", shortcut.key),
                color: theme.highlight,
                weight: Weight::Bold,
            )
            Text(content: format!(" {}", shortcut.action), color: theme.text_dimmed)
        }
    }
    .into_any()
}

#[component]
pub fn ShortcutBar(props: &ShortcutBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let entries: Vec<_> = props
        .shortcuts
        .iter()
        .enumerate()
        .map(|(i, s)| entry(i, s))
        .collect();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            overflow: Overflow::Hidden,
        ) {
            View(
                padding_left: 1,
                padding_right: 1,
                margin_right: 1,
                background_color: theme.highlight,
            ) {
                Text(content: props.mode.clone(), color: theme.text, weight: Weight::Bold)
            }
            #(entries)
        }
    }
}
