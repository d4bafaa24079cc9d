//! # Road Profile
//!
//! Road parameters and cross-section profile construction.
//!
//! ## Architecture
//!
//! ```text
//! RoadParameters → road-profile (ProfileStep lists) → road-mesh (Mesh)
//! ```
//!
//! A cross-section profile is an ordered list of horizontal/vertical
//! steps describing the road's shape when cut perpendicular to its
//! length. The left and right halves are built independently, ordered
//! from the centerline outward, so a sweep extruder can realize each
//! step as one edge extrusion with a known material and UV rectangle.
//!
//! ## Usage
//!
//! ```rust
//! use road_profile::{build_profile, RoadParameters};
//!
//! let params = RoadParameters::default();
//! let profile = build_profile(&params).unwrap();
//! // gutters + kerb riser + kerb top + sidewalk on each side
//! assert_eq!(profile.left.len(), 4);
//! assert_eq!(profile.right.len(), 4);
//! ```

pub mod error;
pub mod params;
pub mod profile;

pub use error::ParameterError;
pub use params::RoadParameters;
pub use profile::{build_profile, Material, Profile, ProfileStep, UvRect};
