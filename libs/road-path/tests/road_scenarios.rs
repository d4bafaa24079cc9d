//! End-to-end road build scenarios across the whole pipeline.

use config::constants::ROAD_SEGMENT_LENGTH;
use glam::DVec3;
use road_path::{build_road, PathCurve};
use road_profile::RoadParameters;

fn straight_curve(length: f64) -> PathCurve {
    PathCurve::line(DVec3::ZERO, DVec3::new(0.0, length, 0.0)).unwrap()
}

#[test]
fn bare_two_lane_road_is_one_face_per_tile() {
    let params = RoadParameters {
        number_lanes: 2,
        lane_width: 3.7,
        gutters: false,
        left_sidewalk: false,
        right_sidewalk: false,
        ..RoadParameters::default()
    };
    let curve = straight_curve(ROAD_SEGMENT_LENGTH);
    let road = build_road(&params, &curve).unwrap();

    assert_eq!(road.tile_count, 1);
    assert_eq!(road.mesh.face_count(), 1);

    let (min, max) = road.mesh.bounding_box();
    assert!((max.x - min.x - 7.4).abs() < 1e-9);

    // UV U spans one unit per lane: 0..2 for two lanes.
    let face = &road.mesh.faces()[0];
    assert_eq!(face.uv[0].x, 2.0);
    assert_eq!(face.uv[2].x, 0.0);
}

#[test]
fn left_sidewalk_with_gutters_has_six_faces_and_asymmetric_width() {
    let params = RoadParameters {
        number_lanes: 2,
        lane_width: 3.7,
        gutters: true,
        left_sidewalk: true,
        right_sidewalk: false,
        kerb_width: 0.127,
        kerb_height: 0.127,
        left_sidewalk_width: 4.0,
        ..RoadParameters::default()
    };
    let curve = straight_curve(ROAD_SEGMENT_LENGTH);
    let road = build_road(&params, &curve).unwrap();

    // 1 road + 2 gutters + 3 left sidewalk stack.
    assert_eq!(road.mesh.face_count(), 6);

    // The riser contributes no horizontal offset.
    let half = 3.7 * 2.0 / 2.0;
    let expected_left = half + 2.0 * 0.127 + 0.127 + 4.0;
    let (min, max) = road.mesh.bounding_box();
    assert!((min.x + expected_left).abs() < 1e-9);
    assert!((max.x - (half + 2.0 * 0.127)).abs() < 1e-9);
}

#[test]
fn two_tiles_weld_at_one_interior_seam() {
    let params = RoadParameters {
        gutters: false,
        left_sidewalk: false,
        right_sidewalk: false,
        ..RoadParameters::default()
    };
    let curve = straight_curve(2.0 * ROAD_SEGMENT_LENGTH);
    let road = build_road(&params, &curve).unwrap();

    assert_eq!(road.tile_count, 2);
    // 8 vertices from two tiles, 2 merged at the seam.
    assert_eq!(road.mesh.vertex_count(), 6);

    // Zero residual gap: no two remaining vertices sit within the weld
    // tolerance of each other.
    let tolerance = 1e-4 * params.lane_width;
    let verts = road.mesh.vertices();
    for i in 0..verts.len() {
        for j in i + 1..verts.len() {
            assert!((verts[i] - verts[j]).length() > tolerance);
        }
    }
}

#[test]
fn boundary_lane_counts_build_valid_meshes() {
    for lanes in [1, 15] {
        let params = RoadParameters {
            number_lanes: lanes,
            ..RoadParameters::default()
        };
        let curve = straight_curve(4.0 * ROAD_SEGMENT_LENGTH);
        let road = build_road(&params, &curve).unwrap();
        assert!(road.mesh.validate(), "lanes = {lanes}");
        assert!(!road.mesh.is_empty());
        assert_eq!(road.mesh.face_count(), 4 * 9);
    }
}

#[test]
fn curved_path_produces_welded_continuous_road() {
    let params = RoadParameters::default();
    let curve = PathCurve::from_points(vec![
        DVec3::ZERO,
        DVec3::new(0.0, 10.0, 0.0),
        DVec3::new(10.0, 20.0, 0.0),
    ])
    .unwrap();
    let road = build_road(&params, &curve).unwrap();

    assert!(road.tile_count >= 1);
    assert_eq!(road.mesh.face_count(), road.tile_count * 9);
    assert!(road.mesh.validate());

    // Interior seams are welded: fewer vertices than tile_count
    // disjoint copies would have.
    let segment_vertices = 20; // 4 base + 2 per extrusion step x 8 steps
    assert!(road.mesh.vertex_count() < road.tile_count * segment_vertices);
}

#[test]
fn road_name_and_rotation_carry_through() {
    let params = RoadParameters {
        road_name: "Main Street".to_string(),
        rotation_degrees: 180.0,
        gutters: false,
        left_sidewalk: false,
        right_sidewalk: false,
        ..RoadParameters::default()
    };
    let curve = straight_curve(2.0 * ROAD_SEGMENT_LENGTH);
    let road = build_road(&params, &curve).unwrap();

    assert_eq!(road.name, "Main Street");
    // Rotated half a turn, the road runs toward -y.
    let (min, max) = road.mesh.bounding_box();
    assert!((min.y + 4.0).abs() < 1e-9);
    assert!(max.y.abs() < 1e-6);
}
