//! # Road Mesh
//!
//! Mesh kernel and sweep extrusion for the road generator.
//!
//! ## Architecture
//!
//! ```text
//! road-profile (ProfileStep lists) → road-mesh (tile Mesh) → road-path (RoadMesh)
//! ```
//!
//! The kernel is a minimal editable quad mesh: planar face creation,
//! deterministic boundary-edge selection, edge extrusion with shared
//! vertices, material/UV assignment in a fixed loop winding, and
//! tolerance-based vertex welding. The sweep extruder drives those
//! primitives to turn a cross-section profile into one road tile.
//!
//! ## Usage
//!
//! ```rust
//! use road_mesh::build_segment;
//! use road_profile::{build_profile, RoadParameters};
//!
//! let params = RoadParameters::default();
//! let profile = build_profile(&params).unwrap();
//! let tile = build_segment(&profile, &params).unwrap();
//! assert!(tile.validate());
//! ```

pub mod error;
pub mod materials;
pub mod mesh;
pub mod sweep;

pub use error::MeshError;
pub use materials::{MaterialId, MaterialRegistry};
pub use mesh::{EdgeHandle, Face, FaceHandle, Mesh, Side};
pub use sweep::build_segment;
