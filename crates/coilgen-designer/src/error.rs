//! Error types for coil parameter validation.

use thiserror::Error;

/// Errors raised when coil parameters violate their invariants.
///
/// Validation runs before any geometry is computed, so a failed
/// generation never has partial output to clean up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A single parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Two or more parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

impl ParameterError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for parameter validation and generation.
pub type ParameterResult<T> = Result<T, ParameterError>;
