//! UI crate for the movie-match client.
//!
//! This crate contains the interaction pipeline behind the search page:
//! the catalog loader feeding the search widget, the recommendation renderer
//! driving the results grid, and the typed views both render from.

pub mod app;
pub mod catalog;
pub mod config;
pub mod markup;
pub mod renderer;
pub mod selector;
pub mod surface;
pub mod view;

#[cfg(test)]
mod test_support;

pub use app::MovieMatchApp;
pub use catalog::CatalogLoader;
pub use config::ClientConfig;
pub use renderer::{RecommendationRenderer, RenderOutcome};
pub use selector::{SelectorConfig, render_item, render_option};
pub use surface::{INITIAL_LAYOUT_CLASS, PageSnapshot, PageState, ResultsSurface};
pub use view::{CardView, CleanTitle, GridContent, clean_title};
