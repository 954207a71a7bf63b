//! List area: loading indicator, table, or empty-state message

use iocraft::prelude::*;

use crate::tui::browse::model::{ListBody, TableViewModel};
use crate::tui::components::DataTable;
use crate::tui::theme::theme;

#[derive(Props)]
pub struct ListBodyViewProps {
    pub body: ListBody,
    pub table: Option<TableViewModel>,
    /// Rows that fit on screen
    pub visible_rows: usize,
}

impl Default for ListBodyViewProps {
    fn default() -> Self {
        Self {
            body: ListBody::Loading,
            table: None,
            visible_rows: 0,
        }
    }
}

fn centered(text: String, color: Color) -> AnyElement<'static> {
    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: text, color)
        }
    }
    .into_any()
}

#[component]
pub fn ListBodyView(props: &ListBodyViewProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let content = match (&props.body, &props.table) {
        (ListBody::Loading, _) => centered("Loading repositories...".to_string(), theme.loading),
        (ListBody::Empty(message), _) => centered(message.clone(), theme.text_dimmed),
        (ListBody::Unavailable, _) | (ListBody::Table, None) => element!(View).into_any(),
        (ListBody::Table, Some(table)) => element! {
            DataTable(
                headers: table.headers.clone(),
                rows: table.rows.clone(),
                selected: table.selected,
                scroll_offset: table.scroll_offset,
                visible_rows: Some(props.visible_rows),
            )
        }
        .into_any(),
    };

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            overflow: Overflow::Hidden,
        ) {
            #(Some(content))
        }
    }
}
