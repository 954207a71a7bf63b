//! Centered modal box drawn over the rest of the screen

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop drawn behind the modal box
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

const DEFAULT_WIDTH_PCT: u32 = 70;

/// Props for the Modal component
#[derive(Default, Props)]
pub struct ModalProps<'a> {
    pub title: Option<String>,
    /// Width as a percentage of the terminal (default 70)
    pub width_pct: Option<u32>,
    /// Hint line under the content
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen overlay with a centered, double-bordered box
#[component]
pub fn Modal<'a>(props: &mut ModalProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let width = props.width_pct.unwrap_or(DEFAULT_WIDTH_PCT).min(100);
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: MODAL_BACKDROP,
        ) {
            View(
                width: Size::Percent(width as f32),
                background_color: theme.background,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                padding: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(title.map(|title| element! {
                    View(
                        width: 100pct,
                        padding_bottom: 1,
                        border_edges: Edges::Bottom,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: title, color: Color::Cyan, weight: Weight::Bold)
                    }
                }))

                View(
                    width: 100pct,
                    flex_direction: FlexDirection::Column,
                    overflow: Overflow::Hidden,
                ) {
                    #(std::mem::take(&mut props.children))
                }

                #(footer.map(|footer| element! {
                    View(
                        width: 100pct,
                        padding_top: 1,
                        border_edges: Edges::Top,
                        border_style: BorderStyle::Single,
                        border_color: theme.border,
                    ) {
                        Text(content: footer, color: theme.text_dimmed)
                    }
                }))
            }
        }
    }
}
