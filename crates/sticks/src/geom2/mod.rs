//! Integer 2D geometry for stick polygons.
//!
//! Purpose
//! - Lattice `Point`/`Stick` primitives, the centroid angular ordering that
//!   turns a point set into a boundary loop, and an exact shoelace area.
//! - A seeded sampler of closed stick sets (`rand`) for tests and benches.
//!
//! Code cross-refs: `Point`, `Stick`, `OrderedPolygon`, `area`

pub mod ordered;
pub mod rand;
mod shoelace;
mod types;
mod util;

pub use ordered::{centroid, order_by_angle, OrderedPolygon};
pub use shoelace::{area, doubled_signed_area, signed_area};
pub use types::{Point, Stick};
pub use util::convex_hull;
