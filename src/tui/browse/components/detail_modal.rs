//! Full detail for one repository

use iocraft::prelude::*;

use crate::tui::browse::model::DetailViewModel;
use crate::tui::components::Modal;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct DetailModalProps {
    pub detail: Option<DetailViewModel>,
}

fn field(label: &'static str, value: String, color: Color) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(width: 100pct, flex_direction: FlexDirection::Row, margin_bottom: 1) {
            View(width: 13, flex_shrink: 0.0) {
                Text(content: label.to_string(), color: theme.text_dimmed, weight: Weight::Bold)
            }
            View(flex_grow: 1.0) {
                Text(content: value, color)
            }
        }
    }
    .into_any()
}

#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(detail) = props.detail.clone() else {
        return element!(View).into_any();
    };

    element! {
        Modal(
            title: Some(detail.full_name.clone()),
            footer_text: Some("[o] Visit Repository   [Esc] Close".to_string()),
        ) {
            #(Some(field("Owner", detail.owner, theme.owner)))
            #(Some(field("Description", detail.description, theme.text)))
            #(Some(field("Stars", detail.stars, theme.stars)))
            #(Some(field("Avatar", detail.avatar_url, theme.text_dimmed)))
            #(Some(field("URL", detail.html_url, theme.highlight)))
        }
    }
    .into_any()
}
