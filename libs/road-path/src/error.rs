//! # Path and Road Errors
//!
//! Error types for curve handling and the top-level build entry point.

use road_mesh::MeshError;
use road_profile::ParameterError;
use thiserror::Error;

/// Errors that can occur while handling path curves.
#[derive(Debug, Error)]
pub enum PathError {
    /// A curve needs at least two control points.
    #[error("Curve needs at least two control points, got {got}")]
    TooFewPoints { got: usize },

    /// The curve has no usable length to place even one tile on.
    #[error("Curve too short: arc length {length} is effectively zero")]
    CurveTooShort { length: f64 },
}

/// Top-level errors from the road build pipeline.
///
/// Every stage propagates failures upward unchanged; this is the only
/// boundary where they become user-visible.
#[derive(Debug, Error)]
pub enum RoadError {
    /// Parameter validation failed before any mesh mutation.
    #[error("{0}")]
    Parameter(#[from] ParameterError),

    /// Mesh construction failed.
    #[error("{0}")]
    Mesh(#[from] MeshError),

    /// Path instancing failed.
    #[error("{0}")]
    Path(#[from] PathError),
}

// =============================================================================
// TESTS
// =============================================================================
