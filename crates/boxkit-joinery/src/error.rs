//! Error types for the joinery crate.
//!
//! Everything here is a configuration error: the tilers are deterministic, so
//! a request that cannot be drawn is rejected before any cut is emitted.

use thiserror::Error;

/// Errors raised by the tilers and the panel composer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JoineryError {
    /// Finger counts must be rounded by the caller.
    #[error("Finger count must be a whole non-negative number, got {0}")]
    FractionalFingerCount(f64),

    /// Invalid parameters were provided to a tiler.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// An edge descriptor used an unknown character.
    #[error("Unknown edge type '{0}'")]
    UnknownEdge(char),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// The canvas rejected a request.
    #[error(transparent)]
    Canvas(#[from] boxkit_core::Error),
}

/// Errors related to panel and tiler parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for joinery operations.
pub type JoineryResult<T> = Result<T, JoineryError>;
