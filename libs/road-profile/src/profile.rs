//! # Cross-Section Profile
//!
//! Builds the ordered cross-section profile for a road: the drivable
//! surface plus optional gutters and kerb/sidewalk stacks on each side.
//!
//! Each [`ProfileStep`] is one outward step from the previous boundary,
//! realized downstream as a single edge extrusion. Within a side the
//! order is physical stacking order and must be preserved: road → gutter
//! → kerb riser → kerb top → sidewalk.
//!
//! ## Texture conventions
//!
//! Texture V always spans one tile length (`ROAD_SEGMENT_LENGTH`). The
//! kerb texture is split into fixed U bands so one image covers gutter
//! (`0.5..1.0`), riser (`0.25..0.5`) and kerb top (`0.0..0.25`)
//! regardless of step width; the road surface maps one U unit per lane
//! and the sidewalk repeats over `0.0..2.0`.

use crate::error::ParameterError;
use crate::params::RoadParameters;
use config::constants::ROAD_SEGMENT_LENGTH;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Material of a road face, also its material slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    /// Drivable surface.
    Road,
    /// Gutters, kerb risers, and kerb tops.
    Kerb,
    /// Sidewalk surface.
    Sidewalk,
}

impl Material {
    /// The material slot index this material occupies.
    #[inline]
    pub fn slot(self) -> u32 {
        match self {
            Material::Road => 0,
            Material::Kerb => 1,
            Material::Sidewalk => 2,
        }
    }

    /// The material name used for host-side lookup-or-create.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Material::Road => "road",
            Material::Kerb => "kerb",
            Material::Sidewalk => "sidewalk",
        }
    }

    /// All materials in slot order.
    pub const ALL: [Material; 3] = [Material::Road, Material::Kerb, Material::Sidewalk];
}

/// The four texture coordinates of one quad face, in the fixed winding
/// (bottom-right, top-right, top-left, bottom-left).
///
/// "Bottom" is the tile start (y = 0), "top" the tile end; "right" is
/// the corner nearer the previous boundary, "left" the newly created
/// far edge. Keeping this winding identical on every face keeps texture
/// orientation consistent across the whole road.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub bottom_right: DVec2,
    pub top_right: DVec2,
    pub top_left: DVec2,
    pub bottom_left: DVec2,
}

impl UvRect {
    /// A rectangle spanning U from `u_near` (right corners, previous
    /// boundary) to `u_far` (left corners, new far edge) and V from 0
    /// to `v_length`.
    pub fn span(u_near: f64, u_far: f64, v_length: f64) -> Self {
        Self {
            bottom_right: DVec2::new(u_near, 0.0),
            top_right: DVec2::new(u_near, v_length),
            top_left: DVec2::new(u_far, v_length),
            bottom_left: DVec2::new(u_far, 0.0),
        }
    }

    /// Corners in winding order (bottom-right, top-right, top-left,
    /// bottom-left), matching face loop order.
    #[inline]
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.bottom_right,
            self.top_right,
            self.top_left,
            self.bottom_left,
        ]
    }
}

/// One ordered step of the cross-section, from the centerline outward.
///
/// `dx` is the outward horizontal offset from the previous boundary
/// (non-negative; the sweep extruder applies the side's sign) and `dz`
/// is the vertical offset. Exactly one of the two is non-zero for every
/// step this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileStep {
    /// Outward horizontal offset from the previous boundary.
    pub dx: f64,
    /// Vertical offset from the previous boundary.
    pub dz: f64,
    /// Material assigned to the resulting face.
    pub material: Material,
    /// Texture coordinates assigned to the resulting face.
    pub uv: UvRect,
}

/// The two halves of a road cross-section, each ordered centerline
/// outward. Created once per parameter set, consumed once by the sweep
/// extruder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Steps growing toward -x.
    pub left: Vec<ProfileStep>,
    /// Steps growing toward +x.
    pub right: Vec<ProfileStep>,
}

/// Builds the left and right cross-section profiles for the given
/// parameters.
///
/// Pure and deterministic. Validates the parameters first and fails
/// fast on the first violation.
///
/// # Example
///
/// ```rust
/// use road_profile::{build_profile, Material, RoadParameters};
///
/// let params = RoadParameters {
///     gutters: true,
///     left_sidewalk: true,
///     right_sidewalk: false,
///     ..RoadParameters::default()
/// };
/// let profile = build_profile(&params).unwrap();
/// assert_eq!(profile.left.len(), 4); // gutter + riser + top + sidewalk
/// assert_eq!(profile.right.len(), 1); // gutter only
/// assert_eq!(profile.left[0].material, Material::Kerb);
/// ```
pub fn build_profile(params: &RoadParameters) -> Result<Profile, ParameterError> {
    params.validate()?;

    let v = ROAD_SEGMENT_LENGTH;
    let mut left = Vec::new();
    let mut right = Vec::new();

    if params.gutters {
        // The gutter texture band is mirrored between sides so the
        // image flows outward on both.
        left.push(ProfileStep {
            dx: 2.0 * params.kerb_width,
            dz: 0.0,
            material: Material::Kerb,
            uv: UvRect::span(1.0, 0.5, v),
        });
        right.push(ProfileStep {
            dx: 2.0 * params.kerb_width,
            dz: 0.0,
            material: Material::Kerb,
            uv: UvRect::span(0.5, 1.0, v),
        });
    }

    if params.left_sidewalk {
        push_sidewalk_stack(&mut left, params, params.left_sidewalk_width, v);
    }
    if params.right_sidewalk {
        push_sidewalk_stack(&mut right, params, params.right_sidewalk_width, v);
    }

    Ok(Profile { left, right })
}

/// Appends the kerb riser, kerb top, and sidewalk steps for one side.
/// Riser before top before sidewalk; the order is physical stacking and
/// the sweep extruder depends on it.
fn push_sidewalk_stack(
    side: &mut Vec<ProfileStep>,
    params: &RoadParameters,
    sidewalk_width: f64,
    v: f64,
) {
    side.push(ProfileStep {
        dx: 0.0,
        dz: params.kerb_height,
        material: Material::Kerb,
        uv: UvRect::span(0.5, 0.25, v),
    });
    side.push(ProfileStep {
        dx: params.kerb_width,
        dz: 0.0,
        material: Material::Kerb,
        uv: UvRect::span(0.25, 0.0, v),
    });
    side.push(ProfileStep {
        dx: sidewalk_width,
        dz: 0.0,
        material: Material::Sidewalk,
        uv: UvRect::span(2.0, 0.0, v),
    });
}

// =============================================================================
// TESTS
// =============================================================================
