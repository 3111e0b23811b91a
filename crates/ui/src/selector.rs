//! Configuration and item templates handed to the search widget.
//!
//! Matching and keyboard navigation belong to the widget; this module only
//! says which fields to use and how an option/selected item looks.

use models::CatalogItem;

use crate::markup::HtmlBuilder;

const OPTION_POSTER_STYLE: &str = "width:25px; vertical-align:middle; margin-right:10px;";

/// Field wiring for the search widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub value_field: &'static str,
    pub label_field: &'static str,
    pub search_field: &'static str,
    pub placeholder: &'static str,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            value_field: "id",
            label_field: "text",
            search_field: "text",
            placeholder: "Type a movie name...",
        }
    }
}

/// Dropdown row: small poster thumbnail followed by the label
pub fn render_option(item: &CatalogItem) -> String {
    HtmlBuilder::new()
        .open("div", &[])
        .void(
            "img",
            &[("src", item.poster.as_str()), ("style", OPTION_POSTER_STYLE)],
        )
        .element("span", &[], &item.text)
        .close("div")
        .finish()
}

/// The chosen item as shown inside the input
pub fn render_item(item: &CatalogItem) -> String {
    HtmlBuilder::new()
        .open("div", &[])
        .element("span", &[], &item.text)
        .close("div")
        .finish()
}
