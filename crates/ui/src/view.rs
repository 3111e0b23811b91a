//! View models for the results grid.
//!
//! Data shaping (title/year split, score rounding, defaults) happens when a
//! `CardView` is built; `GridContent::render_html` only turns the typed views
//! into markup.

use models::Recommendation;

use crate::markup::HtmlBuilder;

pub const LOADING_MESSAGE: &str = "Computing Match Scores...";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const ERROR_MESSAGE: &str = "Could not load recommendations. Please try again.";

/// Inline style that makes a message span the whole 5-column grid
const FULL_WIDTH_STYLE: &str = "grid-column:span 5; text-align:center;";
const LOADING_STYLE: &str = "color:#fff; grid-column:span 5; text-align:center; margin-top:20px;";
const DRAWER_TITLE_STYLE: &str = "margin:0 0 10px 0; color:#000; font-weight:bold;";

/// A raw title split into its display title and release year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTitle {
    pub title: String,
    /// Four-digit year, or empty when the title carries no year suffix
    pub year: String,
}

/// Split a trailing " (YYYY)" suffix off a title.
///
/// "Inception (2010)" -> ("Inception", "2010"); titles without the suffix are
/// returned unchanged with an empty year.
pub fn clean_title(raw: &str) -> CleanTitle {
    match split_year_suffix(raw) {
        Some((title, year)) => CleanTitle {
            title: title.to_string(),
            year: year.to_string(),
        },
        None => CleanTitle {
            title: raw.to_string(),
            year: String::new(),
        },
    }
}

/// Matches `<whitespace>(dddd)` at the very end of the string.
///
/// The year is only read from the same suffix that is stripped from the
/// title, so "Heat(1995)" has no year here even though a bare `(dddd)$`
/// match would find one.
fn split_year_suffix(raw: &str) -> Option<(&str, &str)> {
    // "(dddd)" is 6 ASCII bytes
    let suffix_start = raw.len().checked_sub(6)?;
    if !raw.is_char_boundary(suffix_start) {
        return None;
    }
    let suffix = &raw[suffix_start..];
    let year = suffix.strip_prefix('(')?.strip_suffix(')')?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let head = &raw[..suffix_start];
    let separator = head.chars().next_back().filter(|c| c.is_whitespace())?;
    Some((&head[..head.len() - separator.len_utf8()], year))
}

/// Everything one recommendation card displays
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub year: String,
    pub poster: String,
    pub overview: String,
    pub url: String,
    pub score_percent: i64,
}

impl From<&Recommendation> for CardView {
    fn from(rec: &Recommendation) -> Self {
        let CleanTitle { title, year } = clean_title(&rec.title);
        Self {
            title,
            year,
            poster: rec.poster.clone(),
            overview: rec.overview.clone(),
            url: rec.url.clone(),
            score_percent: rec.score_percent(),
        }
    }
}

impl CardView {
    /// Label of the drawer's external link
    pub fn link_label(&self) -> String {
        format!("View on TMDB ({}%)", self.score_percent)
    }

    /// Collapsed face (poster, title, year) plus the hover/tap drawer
    pub fn render_html(&self) -> String {
        let label = self.link_label();
        HtmlBuilder::new()
            .open("div", &[("class", "movie-card")])
            .open("div", &[("class", "card-base")])
            .void("img", &[("src", self.poster.as_str()), ("class", "card-poster")])
            .open("div", &[("class", "card-meta")])
            .element("h4", &[("class", "card-title")], &self.title)
            .element("div", &[("class", "card-year")], &self.year)
            .close("div")
            .close("div")
            .open("div", &[("class", "card-drawer")])
            .open("div", &[("class", "drawer-content")])
            .element("h5", &[("style", DRAWER_TITLE_STYLE)], &self.title)
            .element("p", &[("class", "drawer-overview")], &self.overview)
            .close("div")
            .element(
                "a",
                &[
                    ("href", self.url.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                    ("class", "drawer-btn"),
                ],
                &label,
            )
            .close("div")
            .close("div")
            .finish()
    }
}

/// What the results grid currently shows.
///
/// Every variant is written to the grid in a single replace.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GridContent {
    /// Nothing selected yet
    #[default]
    Blank,
    Loading,
    NoResults,
    Error(String),
    Cards(Vec<CardView>),
}

impl GridContent {
    /// Number of top-level nodes the grid holds
    pub fn node_count(&self) -> usize {
        match self {
            GridContent::Blank => 0,
            GridContent::Loading | GridContent::NoResults | GridContent::Error(_) => 1,
            GridContent::Cards(cards) => cards.len(),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            GridContent::Cards(cards) => cards.as_slice(),
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GridContent::Loading)
    }

    pub fn render_html(&self) -> String {
        match self {
            GridContent::Blank => String::new(),
            GridContent::Loading => HtmlBuilder::new()
                .element(
                    "div",
                    &[("class", "grid-loading"), ("style", LOADING_STYLE)],
                    LOADING_MESSAGE,
                )
                .finish(),
            GridContent::NoResults => HtmlBuilder::new()
                .element(
                    "div",
                    &[("class", "grid-empty"), ("style", FULL_WIDTH_STYLE)],
                    NO_RESULTS_MESSAGE,
                )
                .finish(),
            GridContent::Error(message) => HtmlBuilder::new()
                .element(
                    "div",
                    &[("class", "grid-error"), ("style", FULL_WIDTH_STYLE)],
                    message,
                )
                .finish(),
            GridContent::Cards(cards) => cards
                .iter()
                .fold(HtmlBuilder::new(), |html, card| html.append(&card.render_html()))
                .finish(),
        }
    }
}
