//! # Road Parameters
//!
//! The flat configuration record for one road build. Defaults and bounds
//! come from the `config` crate; validation fails fast before any mesh
//! mutation happens downstream.

use crate::error::ParameterError;
use config::constants::{
    DEFAULT_KERB_HEIGHT, DEFAULT_KERB_WIDTH, DEFAULT_LANE_WIDTH, DEFAULT_NUMBER_LANES,
    DEFAULT_ROAD_NAME, DEFAULT_ROTATION_DEGREES, DEFAULT_SIDEWALK_WIDTH, MAX_NUMBER_LANES,
    MIN_NUMBER_LANES,
};
use serde::{Deserialize, Serialize};

/// Immutable input parameters for one road build.
///
/// All widths and heights are in meters; `rotation_degrees` is the
/// starting heading of the road about the vertical axis.
///
/// # Example
///
/// ```rust
/// use road_profile::RoadParameters;
///
/// let params = RoadParameters {
///     number_lanes: 4,
///     gutters: false,
///     ..RoadParameters::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.surface_width(), 4.0 * 3.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadParameters {
    /// How many lanes there are across the whole road.
    pub number_lanes: u32,
    /// Width of a single lane.
    pub lane_width: f64,
    /// Height of the kerb on both sides of the road.
    pub kerb_height: f64,
    /// Width of the kerb on both sides of the road.
    pub kerb_width: f64,
    /// Width of the sidewalk on the left hand side.
    pub left_sidewalk_width: f64,
    /// Width of the sidewalk on the right hand side.
    pub right_sidewalk_width: f64,
    /// Make a sidewalk on the left hand side of the road.
    pub left_sidewalk: bool,
    /// Make a sidewalk on the right hand side of the road.
    pub right_sidewalk: bool,
    /// Add gutter geometry to the sides of the road.
    pub gutters: bool,
    /// Starting rotation of the road, in degrees.
    pub rotation_degrees: f64,
    /// Name given to the generated road.
    pub road_name: String,
}

impl Default for RoadParameters {
    fn default() -> Self {
        Self {
            number_lanes: DEFAULT_NUMBER_LANES,
            lane_width: DEFAULT_LANE_WIDTH,
            kerb_height: DEFAULT_KERB_HEIGHT,
            kerb_width: DEFAULT_KERB_WIDTH,
            left_sidewalk_width: DEFAULT_SIDEWALK_WIDTH,
            right_sidewalk_width: DEFAULT_SIDEWALK_WIDTH,
            left_sidewalk: true,
            right_sidewalk: true,
            gutters: true,
            rotation_degrees: DEFAULT_ROTATION_DEGREES,
            road_name: DEFAULT_ROAD_NAME.to_string(),
        }
    }
}

impl RoadParameters {
    /// Validates the parameter record.
    ///
    /// Checks:
    /// - `number_lanes` within `MIN_NUMBER_LANES..=MAX_NUMBER_LANES`
    /// - all widths and heights non-negative
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.number_lanes < MIN_NUMBER_LANES {
            return Err(ParameterError::invalid(
                "number_lanes",
                "Number of lanes must be at least 1",
            ));
        }
        if self.number_lanes > MAX_NUMBER_LANES {
            return Err(ParameterError::invalid(
                "number_lanes",
                format!("Number of lanes must be at most {MAX_NUMBER_LANES}"),
            ));
        }

        let widths: [(&'static str, f64); 5] = [
            ("lane_width", self.lane_width),
            ("kerb_height", self.kerb_height),
            ("kerb_width", self.kerb_width),
            ("left_sidewalk_width", self.left_sidewalk_width),
            ("right_sidewalk_width", self.right_sidewalk_width),
        ];
        for (name, value) in widths {
            if value < 0.0 {
                return Err(ParameterError::invalid(
                    name,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }

        Ok(())
    }

    /// Total width of the drivable surface.
    #[inline]
    pub fn surface_width(&self) -> f64 {
        self.lane_width * self.number_lanes as f64
    }
}

// =============================================================================
// TESTS
// =============================================================================
