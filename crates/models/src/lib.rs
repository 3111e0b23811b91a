//! # Models Crate
//!
//! Shared data model for the movie-match client: the catalog entries that
//! feed the search widget and the ranked recommendation batches returned by
//! the scoring backend.
//!
//! ## Main Components
//!
//! - **types**: Wire types (CatalogItem, Recommendation, ...) and `MovieId`
//! - **error**: Error types for building domain values
//!
//! ## Example Usage
//!
//! ```ignore
//! use models::{MovieId, RecommendationResponse};
//!
//! let id: MovieId = "42".parse()?;
//! let batch: RecommendationResponse = serde_json::from_str(body)?;
//! println!("{} recommendations for {}", batch.len(), id);
//! ```

pub mod error;
pub mod types;

pub use error::{ModelError, Result};
pub use types::{
    CatalogItem,
    CatalogResponse,
    MovieId,
    RecommendRequest,
    Recommendation,
    RecommendationResponse,
};
