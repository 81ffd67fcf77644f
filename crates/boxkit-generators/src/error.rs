//! Error types for the box designs.
//!
//! A design either renders completely or not at all. Parameter problems are
//! reported when the maker is built, before anything is drawn.

use boxkit_joinery::{JoineryError, ParameterError};
use thiserror::Error;

/// Errors that can occur while building or rendering a box design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Invalid parameters were provided to a design.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The requested box cannot be built from the given stock.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A tiler or edge rejected its input.
    #[error("Joinery error: {0}")]
    Joinery(#[from] JoineryError),

    /// The canvas rejected its settings.
    #[error(transparent)]
    Canvas(#[from] boxkit_core::Error),
}

/// Result type alias for box designs.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
