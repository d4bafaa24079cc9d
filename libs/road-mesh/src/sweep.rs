//! # Sweep Extruder
//!
//! Realizes a cross-section profile as one road tile mesh: the base
//! road face first, then each profile step as one boundary-edge
//! extrusion with its material and UV rectangle.
//!
//! The build mutates a scratch mesh and only returns it on full
//! success, so no partially extruded mesh ever escapes to the caller.

use crate::error::MeshError;
use crate::materials::MaterialRegistry;
use crate::mesh::{Mesh, Side};
use config::constants::ROAD_SEGMENT_LENGTH;
use glam::DVec3;
use road_profile::{Material, Profile, ProfileStep, RoadParameters, UvRect};

/// Builds one road tile from a cross-section profile.
///
/// The base face spans the drivable width centered on x = 0 with its
/// start edge at y = 0, UV mapped one U unit per lane. Left profile
/// steps extrude toward -x, right steps toward +x; within a side the
/// step order is preserved because each selection depends on the
/// previous extrusion's far edge.
///
/// # Example
///
/// ```rust
/// use road_mesh::build_segment;
/// use road_profile::{build_profile, RoadParameters};
///
/// let params = RoadParameters::default();
/// let profile = build_profile(&params).unwrap();
/// let mesh = build_segment(&profile, &params).unwrap();
/// // road + 2 gutters + 2 sidewalk stacks of 3
/// assert_eq!(mesh.face_count(), 9);
/// ```
pub fn build_segment(profile: &Profile, params: &RoadParameters) -> Result<Mesh, MeshError> {
    let mut registry = MaterialRegistry::new();
    for material in Material::ALL {
        registry.get_or_create(material.name());
    }

    let mut mesh = Mesh::new();
    mesh.set_material_slots(registry.names().to_vec());

    let face = mesh.add_planar_face(params.surface_width(), ROAD_SEGMENT_LENGTH, DVec3::ZERO)?;
    let road_uv = UvRect::span(params.number_lanes as f64, 0.0, ROAD_SEGMENT_LENGTH);
    mesh.assign_material_uv(face, Material::Road.slot(), &road_uv)?;

    for step in &profile.left {
        extrude_step(&mut mesh, Side::Left, step)?;
    }
    for step in &profile.right {
        extrude_step(&mut mesh, Side::Right, step)?;
    }

    Ok(mesh)
}

/// Extrudes one profile step from the current boundary edge of a side.
fn extrude_step(mesh: &mut Mesh, side: Side, step: &ProfileStep) -> Result<(), MeshError> {
    let edge = mesh
        .boundary_edge(side)
        .ok_or_else(|| MeshError::invalid_topology("no boundary edge to extrude from"))?;

    let dx = match side {
        Side::Left => -step.dx,
        Side::Right => step.dx,
    };
    let face = mesh.extrude_edge(edge, DVec3::new(dx, 0.0, step.dz))?;
    mesh.assign_material_uv(face, step.material.slot(), &step.uv)
}

// =============================================================================
// TESTS
// =============================================================================
