//! Error handling for BoxKit
//!
//! Errors raised by the canvas layer:
//! - Placement errors (unknown move terms)
//! - Canvas setting errors (negative kerf, zero thickness)
//! - Configuration errors (geometrically infeasible requests)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for the canvas layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A placement string contained an unknown term
    #[error("Unknown placement term '{term}' in '{placement}'")]
    InvalidPlacement {
        /// The offending term.
        term: String,
        /// The full placement string.
        placement: String,
    },

    /// A canvas setting is outside its valid range
    #[error("Invalid canvas setting '{name}': {reason}")]
    InvalidSetting {
        /// The setting name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The requested geometry cannot be built
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPlacement {
            term: "sideways".to_string(),
            placement: "up sideways".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown placement term 'sideways' in 'up sideways'"
        );

        let err = Error::InvalidSetting {
            name: "burn".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid canvas setting 'burn': must not be negative"
        );

        let err = Error::configuration("no room for the dials");
        assert_eq!(err.to_string(), "Configuration error: no room for the dials");
        assert!(err.is_configuration_error());
        assert!(!Error::other("x").is_configuration_error());
    }
}
