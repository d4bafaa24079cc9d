//! # Path Curves
//!
//! A path curve is an ordered list of control points defining a 1D path
//! in 3D space, open or closed. Spans between consecutive control
//! points are cubic Beziers; a span whose endpoints carry no handles is
//! exactly straight.
//!
//! The curve itself is only a deformation reference. For placement it
//! is flattened into a uniform polyline and parameterized by arc
//! length; [`ArcLengthParam::frame_at`] then answers "position and
//! local orientation at distance `d`".
//!
//! Frames use a vertical reference (z-up) instead of full Frenet
//! frames, so planar curves keep the road level. A vertically rising
//! tangent falls back to the world x axis for its side vector.

use crate::error::PathError;
use config::constants::{CURVE_SAMPLES_PER_SPAN, EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One control point of a path curve.
///
/// Handles are offsets relative to `position`; `handle_in` shapes the
/// span arriving at this point, `handle_out` the span leaving it. A
/// missing handle defaults to a third of the chord, which makes a
/// handle-less span exactly straight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: DVec3,
    pub handle_in: Option<DVec3>,
    pub handle_out: Option<DVec3>,
}

impl ControlPoint {
    /// A control point without handles.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            handle_in: None,
            handle_out: None,
        }
    }
}

/// An ordered sequence of control points, open or closed.
///
/// # Example
///
/// ```rust
/// use road_path::PathCurve;
/// use glam::DVec3;
///
/// let curve = PathCurve::line(DVec3::ZERO, DVec3::new(0.0, 4.0, 0.0)).unwrap();
/// assert!((curve.arc_length() - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCurve {
    points: Vec<ControlPoint>,
    closed: bool,
}

/// Position and local orientation at one arc-length position.
///
/// `forward` follows the curve, `side` points to the road's right,
/// `up` completes the right-handed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFrame {
    pub position: DVec3,
    pub forward: DVec3,
    pub side: DVec3,
    pub up: DVec3,
}

/// Arc-length parameterization of a flattened curve.
#[derive(Debug, Clone)]
pub struct ArcLengthParam {
    distances: Vec<f64>,
    positions: Vec<DVec3>,
    tangents: Vec<DVec3>,
}

impl PathCurve {
    /// Creates a curve from control points.
    pub fn new(points: Vec<ControlPoint>, closed: bool) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints { got: points.len() });
        }
        Ok(Self { points, closed })
    }

    /// Creates an open polyline curve (no handles) through `positions`.
    pub fn from_points(positions: Vec<DVec3>) -> Result<Self, PathError> {
        Self::new(positions.into_iter().map(ControlPoint::new).collect(), false)
    }

    /// Creates a straight two-point curve.
    pub fn line(start: DVec3, end: DVec3) -> Result<Self, PathError> {
        Self::from_points(vec![start, end])
    }

    /// Returns the control points.
    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Returns true if the curve closes back on its first point.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total arc length of the curve.
    pub fn arc_length(&self) -> f64 {
        self.parameterize().total_length()
    }

    /// Flattens the curve and builds its arc-length parameterization.
    pub fn parameterize(&self) -> ArcLengthParam {
        let positions = self.flatten();

        let mut distances = Vec::with_capacity(positions.len());
        let mut total = 0.0;
        distances.push(0.0);
        for pair in positions.windows(2) {
            total += (pair[1] - pair[0]).length();
            distances.push(total);
        }

        // Central-difference tangents, one-sided at the ends.
        let n = positions.len();
        let mut tangents = Vec::with_capacity(n);
        for i in 0..n {
            let prev = positions[i.saturating_sub(1)];
            let next = positions[(i + 1).min(n - 1)];
            let tangent = (next - prev).normalize_or_zero();
            tangents.push(if tangent == DVec3::ZERO {
                DVec3::Y
            } else {
                tangent
            });
        }

        ArcLengthParam {
            distances,
            positions,
            tangents,
        }
    }

    /// Samples every span into a polyline.
    fn flatten(&self) -> Vec<DVec3> {
        let n = self.points.len();
        let spans = if self.closed { n } else { n - 1 };
        let steps = CURVE_SAMPLES_PER_SPAN as usize;

        let mut out = Vec::with_capacity(spans * steps + 1);
        out.push(self.points[0].position);
        for span in 0..spans {
            let p0 = self.points[span];
            let p1 = self.points[(span + 1) % n];
            let chord = p1.position - p0.position;
            let c1 = p0.position + p0.handle_out.unwrap_or(chord / 3.0);
            let c2 = p1.position + p1.handle_in.unwrap_or(-chord / 3.0);
            for k in 1..=steps {
                let t = k as f64 / steps as f64;
                out.push(cubic_bezier(p0.position, c1, c2, p1.position, t));
            }
        }
        out
    }
}

impl ArcLengthParam {
    /// Total arc length of the flattened curve.
    #[inline]
    pub fn total_length(&self) -> f64 {
        *self.distances.last().unwrap_or(&0.0)
    }

    /// Position and orientation frame at arc-length `distance`.
    ///
    /// The distance is clamped to the curve's span, so callers may
    /// overshoot slightly at the far end without wrapping.
    pub fn frame_at(&self, distance: f64) -> PathFrame {
        let total = self.total_length();
        let d = distance.clamp(0.0, total);

        let i = self
            .distances
            .partition_point(|&x| x < d)
            .clamp(1, self.distances.len() - 1);
        let (d0, d1) = (self.distances[i - 1], self.distances[i]);
        let t = if d1 - d0 > EPSILON {
            (d - d0) / (d1 - d0)
        } else {
            0.0
        };

        let position = self.positions[i - 1].lerp(self.positions[i], t);
        let mut forward = self.tangents[i - 1].lerp(self.tangents[i], t).normalize_or_zero();
        if forward == DVec3::ZERO {
            forward = self.tangents[i];
        }

        // Vertical-reference frame; a vertical tangent degenerates to
        // the world x axis.
        let mut side = forward.cross(DVec3::Z);
        if side.length_squared() < EPSILON {
            side = DVec3::X;
        } else {
            side = side.normalize();
        }
        let up = side.cross(forward).normalize();

        PathFrame {
            position,
            forward,
            side,
            up,
        }
    }
}

/// Evaluates a cubic Bezier at parameter `t`.
fn cubic_bezier(p0: DVec3, c1: DVec3, c2: DVec3, p1: DVec3, t: f64) -> DVec3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}

// =============================================================================
// TESTS
// =============================================================================
