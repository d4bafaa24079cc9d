//! # Parameter Errors
//!
//! Error types for road parameter validation.

use thiserror::Error;

/// Errors that can occur while validating road parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A parameter is outside its legal domain.
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },
}

impl ParameterError {
    /// Creates an invalid parameter error.
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParameterError::invalid("number_lanes", "must be at least 1");
        assert!(err.to_string().contains("number_lanes"));
        assert!(err.to_string().contains("must be at least 1"));
    }
}
