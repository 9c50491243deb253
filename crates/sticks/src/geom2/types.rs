//! Integer 2D primitives: `Point` and `Stick`.
//!
//! - `Point`: integer lattice point with value identity and lexicographic order.
//! - `Stick`: a segment given by its two endpoints (orientation carries no meaning).
//!
//! Code cross-refs: `ordered::OrderedPolygon`, `shoelace::{signed_area, area}`

/// Integer lattice point `(x, y)`.
///
/// Ordered lexicographically (x, then y); tallies and unique-point lists rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// A stick: segment between endpoints `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stick {
    pub a: Point,
    pub b: Point,
}

impl Stick {
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Record form `x1 y1 x2 y2`.
    #[inline]
    pub const fn from_coords(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            a: Point::new(x1, y1),
            b: Point::new(x2, y2),
        }
    }
    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }
    /// Same segment with the endpoints swapped.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
    /// True if both endpoints coincide (zero-length stick).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}
