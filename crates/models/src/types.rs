//! Wire types shared by the catalog and recommendation endpoints.
//!
//! Everything here is decoded leniently: the backend is an external
//! collaborator, so missing or `null` display fields fall back to empty
//! values instead of failing the whole response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ModelError, Result};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque identifier of a catalog movie.
///
/// The backend is free to emit either a JSON number or a JSON string. We keep
/// whichever shape it sent so the id round-trips unchanged into the
/// recommendation request body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

/// Parses a selection value coming from the search widget.
///
/// Widget values are always strings. A value is read back as a number only
/// when it is the canonical rendering of that number, so text ids such as
/// "007" or "+5" keep their exact spelling.
impl FromStr for MovieId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ModelError::EmptyMovieId);
        }
        Ok(match value.parse::<i64>() {
            Ok(n) if n.to_string() == value => MovieId::Number(n),
            _ => MovieId::Text(value.to_string()),
        })
    }
}

impl From<i64> for MovieId {
    fn from(n: i64) -> Self {
        MovieId::Number(n)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A selectable entry in the search widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: MovieId,
    /// Display label, usually "Title (Year)"
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Poster URL; empty when the backend has none
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: String,
}

/// Body of `GET /api/movies`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<CatalogItem>,
}

// =============================================================================
// Recommendations
// =============================================================================

/// Body of `POST /api/recommend`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub movie_id: MovieId,
}

/// One ranked result in a recommendation batch.
///
/// `score` only means something relative to the other entries of the same
/// batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendation {
    /// Raw label, commonly suffixed with " (YYYY)"
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    /// External detail page
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Match strength, expected within 0..=100
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
}

impl Recommendation {
    /// Score as the whole percentage shown on the card
    pub fn score_percent(&self) -> i64 {
        if self.score.is_finite() {
            self.score.round() as i64
        } else {
            0
        }
    }
}

/// Body of the recommendation endpoint, already in rank order.
///
/// The client never re-sorts this list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationResponse {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
