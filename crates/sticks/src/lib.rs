//! Stick polygons: closure check and enclosed area.
//!
//! Pipeline
//! - `input::parse_sticks`: `N` then `N` records `x1 y1 x2 y2` → `StickSet`.
//! - `closure::check_closure`: every endpoint even, ≥ 3 distinct points.
//! - `geom2::OrderedPolygon`: angle sort around the vertex centroid.
//! - `geom2::area`: exact shoelace.
//! - `verdict::Verdict`: the printed answer.
//!
//! The stages only pass owned values forward; nothing is shared or global.

pub mod closure;
pub mod geom2;
pub mod input;
pub mod tally;
pub mod verdict;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use closure::{check_closure, Closure};
pub use geom2::{OrderedPolygon, Point, Stick};
pub use input::{parse_sticks, ParseError};
pub use tally::{EndpointTally, StickSet};
pub use verdict::{Verdict, VerdictRecord};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closure::{check_closure, Closure};
    pub use crate::geom2::rand::{draw_closed_sticks, ReplayToken, StickGenCfg, VertexCount};
    pub use crate::geom2::{area, OrderedPolygon, Point, Stick};
    pub use crate::input::parse_sticks;
    pub use crate::tally::StickSet;
    pub use crate::verdict::Verdict;
    pub use crate::{analyze, analyze_text};
}

/// Run closure check, ordering, and area on an already-read stick set.
pub fn analyze(set: &StickSet) -> Verdict {
    let points = match check_closure(set.tally()) {
        Closure::Closed(points) => points,
        Closure::Open { point, count } => {
            tracing::debug!(x = point.x, y = point.y, count, "odd endpoint, not closed");
            return Verdict::NotClosed;
        }
        Closure::Degenerate { distinct } => {
            tracing::debug!(distinct, "too few distinct points, not closed");
            return Verdict::NotClosed;
        }
    };
    let polygon = OrderedPolygon::from_points(points);
    let area = polygon.area();
    tracing::debug!(vertices = polygon.len(), area, "closed polygon");
    Verdict::Closed { area }
}

/// Parse `text` and analyze it.
pub fn analyze_text(text: &str) -> Result<Verdict, ParseError> {
    let set = parse_sticks(text)?;
    Ok(analyze(&set))
}
