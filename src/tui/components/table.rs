//! Column-driven table renderer.
//!
//! A table is described by a list of [`Column`]s, each knowing how to turn one
//! item into a [`Cell`]. [`render_rows`] applies the columns to a slice of
//! items and is pure, so row contents can be tested without a terminal.
//! [`DataTable`] draws the result.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// How much horizontal space a column takes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed number of terminal cells
    Fixed(u32),
    /// Share of the remaining width
    Flex(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Flex(1.0)
    }
}

/// One rendered table cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Column title and width, without the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderCell {
    pub title: String,
    pub width: ColumnWidth,
}

/// A table column over items of type `T`
pub struct Column<'a, T> {
    title: &'static str,
    width: ColumnWidth,
    render: Box<dyn Fn(&T) -> Cell + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(
        title: &'static str,
        width: ColumnWidth,
        render: impl Fn(&T) -> Cell + 'a,
    ) -> Self {
        Self {
            title,
            width,
            render: Box::new(render),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn render(&self, item: &T) -> Cell {
        (self.render)(item)
    }

    pub fn header(&self) -> HeaderCell {
        HeaderCell {
            title: self.title.to_string(),
            width: self.width,
        }
    }
}

pub fn headers<T>(columns: &[Column<'_, T>]) -> Vec<HeaderCell> {
    columns.iter().map(Column::header).collect()
}

/// Apply every column to every item, in order
pub fn render_rows<T>(items: &[T], columns: &[Column<'_, T>]) -> Vec<Vec<Cell>> {
    items
        .iter()
        .map(|item| columns.iter().map(|column| column.render(item)).collect())
        .collect()
}

/// Props for the DataTable component
#[derive(Default, Props)]
pub struct DataTableProps {
    pub headers: Vec<HeaderCell>,
    /// Rows as produced by [`render_rows`]
    pub rows: Vec<Vec<Cell>>,
    /// Absolute index of the highlighted row
    pub selected: Option<usize>,
    /// Index of the first visible row
    pub scroll_offset: usize,
    /// Rows to draw; all remaining rows when unset
    pub visible_rows: Option<usize>,
}

fn cell_view(width: ColumnWidth, content: AnyElement<'static>) -> AnyElement<'static> {
    let (fixed, grow) = match width {
        ColumnWidth::Fixed(n) => (Some(n), 0.0),
        ColumnWidth::Flex(g) => (None, g),
    };
    element! {
        View(
            width: fixed.map(Size::Length).unwrap_or(Size::Auto),
            flex_grow: grow,
            flex_shrink: if fixed.is_some() { 0.0 } else { 1.0 },
            height: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            #(Some(content))
        }
    }
    .into_any()
}

/// Table with a bold header row and an optional highlighted row
#[component]
pub fn DataTable(props: &DataTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let visible = props
        .visible_rows
        .unwrap_or(props.rows.len().saturating_sub(props.scroll_offset));

    let header = props.headers.iter().map(|h| {
        cell_view(
            h.width,
            element! {
                Text(content: h.title.clone(), color: theme.text_dimmed, weight: Weight::Bold)
            }
            .into_any(),
        )
    });

    let rows = props
        .rows
        .iter()
        .enumerate()
        .skip(props.scroll_offset)
        .take(visible)
        .map(|(index, cells)| {
            let is_selected = props.selected == Some(index);
            let cells = cells.iter().zip(props.headers.iter()).map(move |(cell, h)| {
                let color = if is_selected {
                    theme.text
                } else {
                    cell.color.unwrap_or(theme.text)
                };
                cell_view(
                    h.width,
                    element! {
                        Text(
                            content: cell.text.clone(),
                            color,
                            weight: if cell.bold { Weight::Bold } else { Weight::Normal },
                        )
                    }
                    .into_any(),
                )
            });
            element! {
                View(
                    width: 100pct,
                    height: 1,
                    flex_direction: FlexDirection::Row,
                    padding_left: 1,
                    background_color: if is_selected { Some(theme.highlight) } else { None },
                ) {
                    #(cells)
                }
            }
        });

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Column) {
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                padding_left: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                #(header)
            }
            #(rows)
        }
    }
}
