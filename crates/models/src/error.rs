//! Error types for the models crate.

use thiserror::Error;

/// Errors that can occur while building domain values from raw input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// A selection value was empty or only whitespace
    #[error("Movie id cannot be empty")]
    EmptyMovieId,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
