//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_seam_weld_factor_small_relative_to_lane() {
    // The weld radius must stay well below any legal lane width so seam
    // welding can never collapse cross-section geometry.
    assert!(SEAM_WELD_FACTOR * MAX_LANE_WIDTH < MIN_LANE_WIDTH / 100.0);
}

// =============================================================================
// ROAD GEOMETRY TESTS
// =============================================================================

#[test]
fn test_road_segment_length() {
    assert_eq!(ROAD_SEGMENT_LENGTH, 2.0);
}

// =============================================================================
// PARAMETER BOUND TESTS
// =============================================================================

#[test]
fn test_lane_count_bounds_ordered() {
    assert!(MIN_NUMBER_LANES >= 1);
    assert!(MIN_NUMBER_LANES <= DEFAULT_NUMBER_LANES);
    assert!(DEFAULT_NUMBER_LANES <= MAX_NUMBER_LANES);
}

#[test]
fn test_lane_width_bounds_ordered() {
    assert!(MIN_LANE_WIDTH <= DEFAULT_LANE_WIDTH);
    assert!(DEFAULT_LANE_WIDTH <= MAX_LANE_WIDTH);
}

#[test]
fn test_kerb_defaults_within_bounds() {
    assert!(DEFAULT_KERB_HEIGHT > 0.0 && DEFAULT_KERB_HEIGHT <= MAX_KERB_SIZE);
    assert!(DEFAULT_KERB_WIDTH > 0.0 && DEFAULT_KERB_WIDTH <= MAX_KERB_SIZE);
}

#[test]
fn test_sidewalk_width_bounds_ordered() {
    assert!(MIN_SIDEWALK_WIDTH <= DEFAULT_SIDEWALK_WIDTH);
    assert!(DEFAULT_SIDEWALK_WIDTH <= MAX_SIDEWALK_WIDTH);
}

#[test]
fn test_rotation_bounds() {
    assert_eq!(DEFAULT_ROTATION_DEGREES, 0.0);
    assert_eq!(MAX_ROTATION_DEGREES, 360.0);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_curve_samples_per_span() {
    assert!(
        CURVE_SAMPLES_PER_SPAN >= 8,
        "coarser sampling would distort arc-length parameterization"
    );
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
