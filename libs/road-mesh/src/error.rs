//! # Mesh Errors
//!
//! Error types for mesh kernel operations.

use thiserror::Error;

/// Errors that can occur during mesh construction.
#[derive(Debug, Error)]
pub enum MeshError {
    /// An operation would produce zero-area or self-intersecting geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A handle was used after a weld invalidated it. This is an ordering
    /// bug in the caller, not a recoverable condition.
    #[error("Stale handle: {message}")]
    StaleHandle { message: String },

    /// The mesh is in a state an operation cannot work with.
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a stale handle error.
    pub fn stale_handle(message: impl Into<String>) -> Self {
        Self::StaleHandle {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
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
        let err = MeshError::degenerate("zero translation");
        assert!(err.to_string().contains("Degenerate geometry"));

        let err = MeshError::stale_handle("edge 3");
        assert!(err.to_string().contains("Stale handle"));
    }
}
