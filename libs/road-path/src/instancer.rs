//! # Path Instancer
//!
//! Repeats one road tile along a path curve. The tile is treated as a
//! repeatable unit of length `ROAD_SEGMENT_LENGTH` along its local +y
//! axis; the curve supplies a frame per arc-length position and every
//! tile vertex is bent into that frame (fit-to-curve, not rigid
//! placement). Adjacent tile seams land on identical arc-length
//! positions and are welded away.

use crate::curve::PathCurve;
use crate::error::PathError;
use config::constants::{DEFAULT_ROAD_NAME, EPSILON, ROAD_SEGMENT_LENGTH};
use road_mesh::Mesh;

/// The final artifact: the instanced road mesh plus build metadata.
///
/// The path curve is referenced during the build only and never owned
/// or mutated; persistence of both is the host's concern.
#[derive(Debug, Clone)]
pub struct RoadMesh {
    /// The welded, curve-deformed mesh.
    pub mesh: Mesh,
    /// Name of the road, for host-side object naming.
    pub name: String,
    /// Arc length of the curve the road covers.
    pub curve_length: f64,
    /// Number of tiles instanced along the curve.
    pub tile_count: usize,
}

/// Instances a tile mesh along a curve.
///
/// Tile count is the curve length divided by the tile length, rounded,
/// but at least one: a curve shorter than one tile still produces a
/// single compressed tile. Tiles are uniformly stretched or compressed
/// so they exactly cover the curve. Each vertex is mapped by its local
/// y to an arc-length frame and offset along the frame's side and up
/// axes by its local x and z.
///
/// `rotation_degrees` turns the whole instanced result about the
/// vertical axis before seam welding; `weld_tolerance` is the absolute
/// merge distance at tile seams.
///
/// Fails with [`PathError::CurveTooShort`] only when the curve's arc
/// length is effectively zero.
pub fn instance_along_path(
    segment: &Mesh,
    curve: &PathCurve,
    rotation_degrees: f64,
    weld_tolerance: f64,
) -> Result<RoadMesh, PathError> {
    let param = curve.parameterize();
    let length = param.total_length();
    if length < EPSILON {
        return Err(PathError::CurveTooShort { length });
    }

    let tile_count = ((length / ROAD_SEGMENT_LENGTH).round() as usize).max(1);
    // Fit-to-curve: uniform arc-length scale so the tiles span the
    // curve exactly.
    let scale = length / (tile_count as f64 * ROAD_SEGMENT_LENGTH);

    let mut mesh = Mesh::new();
    for tile_index in 0..tile_count {
        let base = tile_index as f64 * ROAD_SEGMENT_LENGTH;
        let mut tile = segment.clone();
        tile.map_vertices(|v| {
            let frame = param.frame_at((base + v.y) * scale);
            frame.position + frame.side * v.x + frame.up * v.z
        });
        mesh.merge(&tile);
    }

    mesh.rotate_z(rotation_degrees.to_radians());
    mesh.weld_vertices(weld_tolerance);

    Ok(RoadMesh {
        mesh,
        name: DEFAULT_ROAD_NAME.to_string(),
        curve_length: length,
        tile_count,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use road_mesh::build_segment;
    use road_profile::{build_profile, RoadParameters};

    fn bare_segment() -> (Mesh, RoadParameters) {
        let params = RoadParameters {
            gutters: false,
            left_sidewalk: false,
            right_sidewalk: false,
            ..RoadParameters::default()
        };
        let profile = build_profile(&params).unwrap();
        (build_segment(&profile, &params).unwrap(), params)
    }

    fn straight_curve(length: f64) -> PathCurve {
        PathCurve::line(DVec3::ZERO, DVec3::new(0.0, length, 0.0)).unwrap()
    }

    #[test]
    fn test_two_tiles_on_double_length_curve() {
        let (segment, _) = bare_segment();
        let curve = straight_curve(2.0 * ROAD_SEGMENT_LENGTH);
        let road = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap();

        assert_eq!(road.tile_count, 2);
        // 2 tiles x 4 vertices, minus the 2 welded at the interior seam.
        assert_eq!(road.mesh.vertex_count(), 6);
        assert_eq!(road.mesh.face_count(), 2);
        assert!(road.mesh.validate());

        // No residual gap: the road spans the whole curve.
        let (min, max) = road.mesh.bounding_box();
        assert!(min.y.abs() < 1e-9);
        assert!((max.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_duplicate_seam_vertices_remain() {
        let (segment, _) = bare_segment();
        let curve = straight_curve(5.0 * ROAD_SEGMENT_LENGTH);
        let road = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap();

        let verts = road.mesh.vertices();
        for i in 0..verts.len() {
            for j in i + 1..verts.len() {
                assert!(
                    (verts[i] - verts[j]).length() > 1e-4,
                    "vertices {i} and {j} coincide"
                );
            }
        }
    }

    #[test]
    fn test_short_curve_compresses_one_tile() {
        let (segment, _) = bare_segment();
        let curve = straight_curve(0.5);
        let road = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap();

        assert_eq!(road.tile_count, 1);
        let (min, max) = road.mesh.bounding_box();
        assert!((max.y - min.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_curve_rejected() {
        let (segment, _) = bare_segment();
        let curve = PathCurve::line(DVec3::ZERO, DVec3::ZERO).unwrap();
        let err = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap_err();
        assert!(matches!(err, PathError::CurveTooShort { .. }));
    }

    #[test]
    fn test_rotation_turns_heading() {
        let (segment, _) = bare_segment();
        let curve = straight_curve(2.0 * ROAD_SEGMENT_LENGTH);
        let road = instance_along_path(&segment, &curve, 90.0, 1e-4).unwrap();

        // A road built along +y, rotated 90 degrees about z, heads -x.
        let (min, max) = road.mesh.bounding_box();
        assert!((min.x + 4.0).abs() < 1e-9);
        assert!(max.x.abs() < 1e-6);
        assert!((max.y - min.y - 7.4).abs() < 1e-9);
    }

    #[test]
    fn test_bent_road_follows_corner() {
        let (segment, _) = bare_segment();
        let curve = PathCurve::from_points(vec![
            DVec3::ZERO,
            DVec3::new(0.0, 4.0, 0.0),
            DVec3::new(4.0, 4.0, 0.0),
        ])
        .unwrap();
        let road = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap();

        assert_eq!(road.tile_count, 4);
        assert!((road.curve_length - 8.0).abs() < 1e-9);
        // Bending, not rigid placement: the mesh reaches into the +x arm.
        let (_, max) = road.mesh.bounding_box();
        assert!(max.x > 3.0);
        assert!(road.mesh.validate());
    }

    #[test]
    fn test_tile_faces_and_materials_carried_over() {
        let params = RoadParameters::default();
        let profile = build_profile(&params).unwrap();
        let segment = build_segment(&profile, &params).unwrap();
        let curve = straight_curve(3.0 * ROAD_SEGMENT_LENGTH);
        let road = instance_along_path(&segment, &curve, 0.0, 1e-4).unwrap();

        assert_eq!(road.mesh.face_count(), 3 * 9);
        assert_eq!(road.mesh.material_slots(), ["road", "kerb", "sidewalk"]);
        // Per-face UVs survive instancing; every tile repeats the same rects.
        let faces = road.mesh.faces();
        assert_eq!(faces[0].uv, faces[9].uv);
    }
}
