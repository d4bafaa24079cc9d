//! # Configuration Constants
//!
//! Centralized constants for the road generation pipeline. All geometry
//! tolerances, road dimensions, and parameter bounds are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Road geometry**: Tile length and texture mapping conventions
//! - **Parameter bounds**: Defaults and min/max for road parameters
//! - **Sampling**: Path curve tessellation density

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication inside one cross-section build.
///
/// Slightly larger tolerance used when merging nearly-identical vertices
/// during mesh cleanup. This helps remove numerical noise introduced by
/// transformations.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Relative tolerance for welding tile seams, as a fraction of lane width.
///
/// The absolute weld distance at the seam between two adjacent road tiles
/// is `SEAM_WELD_FACTOR * lane_width`, so the merge radius scales with the
/// road rather than being a fixed world-space value.
///
/// # Example
///
/// ```rust
/// use config::constants::SEAM_WELD_FACTOR;
///
/// let lane_width = 3.7;
/// let tolerance = SEAM_WELD_FACTOR * lane_width;
/// assert!(tolerance < 0.001);
/// ```
pub const SEAM_WELD_FACTOR: f64 = 1e-4;

// =============================================================================
// ROAD GEOMETRY CONSTANTS
// =============================================================================

/// Length of one repeatable road tile along its local +y axis.
///
/// The sweep extruder builds exactly one tile of this length; the path
/// instancer repeats it along the curve. Texture V coordinates span one
/// tile length, so textures repeat seamlessly per tile.
///
/// # Example
///
/// ```rust
/// use config::constants::ROAD_SEGMENT_LENGTH;
///
/// let curve_length = 11.0;
/// let tiles = (curve_length / ROAD_SEGMENT_LENGTH).round().max(1.0) as usize;
/// assert_eq!(tiles, 6);
/// ```
pub const ROAD_SEGMENT_LENGTH: f64 = 2.0;

// =============================================================================
// PARAMETER BOUNDS (defaults/min/max of the configuration surface)
// =============================================================================

/// Default number of lanes across the whole road.
pub const DEFAULT_NUMBER_LANES: u32 = 2;

/// Minimum number of lanes.
pub const MIN_NUMBER_LANES: u32 = 1;

/// Maximum number of lanes.
///
/// Safety bound for the configuration surface; builds are sized
/// proportionally to the lane count.
pub const MAX_NUMBER_LANES: u32 = 15;

/// Default width of a single lane, in meters.
pub const DEFAULT_LANE_WIDTH: f64 = 3.7;

/// Recommended minimum lane width exposed by the configuration surface.
pub const MIN_LANE_WIDTH: f64 = 1.0;

/// Recommended maximum lane width exposed by the configuration surface.
pub const MAX_LANE_WIDTH: f64 = 10.0;

/// Default kerb height, in meters (a standard 5-inch kerb).
pub const DEFAULT_KERB_HEIGHT: f64 = 0.127;

/// Default kerb width, in meters.
pub const DEFAULT_KERB_WIDTH: f64 = 0.127;

/// Maximum kerb height/width exposed by the configuration surface.
pub const MAX_KERB_SIZE: f64 = 1.0;

/// Default sidewalk width for either side, in meters.
pub const DEFAULT_SIDEWALK_WIDTH: f64 = 4.0;

/// Recommended minimum sidewalk width exposed by the configuration surface.
pub const MIN_SIDEWALK_WIDTH: f64 = 1.0;

/// Recommended maximum sidewalk width exposed by the configuration surface.
pub const MAX_SIDEWALK_WIDTH: f64 = 10.0;

/// Default starting rotation of the road, in degrees about the vertical axis.
pub const DEFAULT_ROTATION_DEGREES: f64 = 0.0;

/// Maximum starting rotation, in degrees.
pub const MAX_ROTATION_DEGREES: f64 = 360.0;

/// Default name given to a generated road.
pub const DEFAULT_ROAD_NAME: &str = "Road";

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Number of straight sub-segments used to flatten one cubic curve span.
///
/// Arc-length parameterization walks a polyline approximation of the
/// curve; this controls how fine that polyline is per control-point span.
///
/// # Example
///
/// ```rust
/// use config::constants::CURVE_SAMPLES_PER_SPAN;
///
/// let spans = 4;
/// let table_entries = spans * CURVE_SAMPLES_PER_SPAN as usize + 1;
/// assert_eq!(table_entries, 129);
/// ```
pub const CURVE_SAMPLES_PER_SPAN: u32 = 32;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
