//! # Road Path
//!
//! Path curves, curve-deformed instancing, and the host-facing build
//! entry point.
//!
//! ## Architecture
//!
//! ```text
//! RoadParameters → road-profile → road-mesh (tile) → road-path (RoadMesh)
//! ```
//!
//! The whole pipeline is a single-threaded, synchronous computation:
//! each stage is a pure function over its inputs plus in-place
//! mutation of one mesh it exclusively owns. Independent road builds
//! share no mutable state and can run concurrently without locking.
//!
//! ## Usage
//!
//! ```rust
//! use road_path::{build_road, PathCurve};
//! use road_profile::RoadParameters;
//! use glam::DVec3;
//!
//! let params = RoadParameters::default();
//! let curve = PathCurve::line(DVec3::ZERO, DVec3::new(0.0, 10.0, 0.0)).unwrap();
//! let road = build_road(&params, &curve).unwrap();
//! assert_eq!(road.name, "Road");
//! assert_eq!(road.tile_count, 5);
//! ```

pub mod curve;
pub mod error;
pub mod instancer;

pub use curve::{ArcLengthParam, ControlPoint, PathCurve, PathFrame};
pub use error::{PathError, RoadError};
pub use instancer::{instance_along_path, RoadMesh};

use config::constants::SEAM_WELD_FACTOR;
use road_mesh::build_segment;
use road_profile::{build_profile, RoadParameters};

/// Builds a complete road mesh from parameters and a path curve.
///
/// This is the main entry point for the road generation pipeline:
/// validate parameters, build the cross-section profile, sweep it into
/// one tile, then instance the tile along the curve with seam welding.
/// Errors from every stage propagate unchanged; no partial mesh is
/// ever returned.
///
/// The seam weld tolerance is `SEAM_WELD_FACTOR * lane_width`, so the
/// merge radius scales with the road.
///
/// # Example
///
/// ```rust
/// use road_path::{build_road, PathCurve};
/// use road_profile::RoadParameters;
/// use glam::DVec3;
///
/// let params = RoadParameters {
///     road_name: "High Street".to_string(),
///     ..RoadParameters::default()
/// };
/// let curve = PathCurve::line(DVec3::ZERO, DVec3::new(0.0, 4.0, 0.0)).unwrap();
/// let road = build_road(&params, &curve).unwrap();
/// assert_eq!(road.name, "High Street");
/// assert!(road.mesh.validate());
/// ```
pub fn build_road(params: &RoadParameters, curve: &PathCurve) -> Result<RoadMesh, RoadError> {
    let profile = build_profile(params)?;
    let segment = build_segment(&profile, params)?;

    let weld_tolerance = SEAM_WELD_FACTOR * params.lane_width;
    let mut road = instance_along_path(&segment, curve, params.rotation_degrees, weld_tolerance)?;
    road.name = params.road_name.clone();
    Ok(road)
}
