//! Angle-ordered vertex loop around the vertex centroid (OrderedPolygon).
//!
//! Purpose
//! - Turn an unordered set of distinct lattice points into one cyclic sequence
//!   usable as a polygon boundary for the shoelace formula.
//!
//! Model
//! - Centroid = arithmetic mean of the points (exact integer sums, one division).
//! - Each point is keyed by `atan2(y - cy, x - cx)` and the points are stably
//!   sorted ascending, which walks counterclockwise starting just past -π.
//! - This is a heuristic: it reproduces the boundary only when every vertex is
//!   visible from the centroid at a distinct angle (star-convex shapes). Other
//!   shapes still produce a loop over the same points, not necessarily the true boundary.
//!
//! Code cross-refs: `types::Point`, `shoelace::{area, signed_area}`

use nalgebra::Vector2;

use super::shoelace;
use super::types::Point;

/// Cyclic vertex sequence produced by [`OrderedPolygon::from_points`].
///
/// Invariants:
/// - Vertices are sorted by ascending angle around their own centroid.
/// - Equal angles keep the relative order of the input (stable sort).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedPolygon {
    pub vertices: Vec<Point>,
}

impl OrderedPolygon {
    /// Order `points` by angle around their centroid.
    pub fn from_points(points: Vec<Point>) -> Self {
        let vertices = order_by_angle(points);
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Enclosed area of the loop (shoelace, orientation-free).
    #[inline]
    pub fn area(&self) -> f64 {
        shoelace::area(&self.vertices)
    }

    /// Signed area; positive for the counterclockwise loops this type produces
    /// on star-convex input.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        shoelace::signed_area(&self.vertices)
    }
}

/// Arithmetic-mean centroid of `points`. Sums are exact so the result does not
/// depend on the order of `points`.
pub fn centroid(points: &[Point]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let (sx, sy) = points.iter().fold((0i128, 0i128), |(sx, sy), p| {
        (sx + p.x as i128, sy + p.y as i128)
    });
    let n = points.len() as f64;
    Some(Vector2::new(sx as f64 / n, sy as f64 / n))
}

#[inline]
fn angle_around(p: Point, c: Vector2<f64>) -> f64 {
    (p.y as f64 - c.y).atan2(p.x as f64 - c.x)
}

/// Stable ascending sort of `points` by angle around their centroid.
pub fn order_by_angle(points: Vec<Point>) -> Vec<Point> {
    let Some(c) = centroid(&points) else {
        return points;
    };
    let mut keyed: Vec<(f64, Point)> = points
        .into_iter()
        .map(|p| (angle_around(p, c), p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    tracing::trace!(vertices = keyed.len(), cx = c.x, cy = c.y, "ordered by angle");
    keyed.into_iter().map(|(_, p)| p).collect()
}
