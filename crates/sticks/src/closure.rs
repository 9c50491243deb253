//! Parity closure check over the endpoint tally.
//!
//! A stick set closes when every endpoint occurs an even number of times and
//! at least three distinct points remain. Vertices shared by four, six, …
//! sticks pass the parity test; no simplicity check is made on top of it.

use crate::geom2::Point;
use crate::tally::EndpointTally;

/// Fewest distinct points that can bound positive area.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Outcome of [`check_closure`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Closure {
    /// `point` is the first (in point order) endpoint with an odd count.
    Open { point: Point, count: usize },
    /// All counts even, but fewer than [`MIN_POLYGON_POINTS`] distinct points.
    Degenerate { distinct: usize },
    /// Distinct endpoints in point order.
    Closed(Vec<Point>),
}

impl Closure {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, Closure::Closed(_))
    }
    #[inline]
    pub fn into_points(self) -> Option<Vec<Point>> {
        match self {
            Closure::Closed(points) => Some(points),
            _ => None,
        }
    }
}

pub fn check_closure(tally: &EndpointTally) -> Closure {
    if let Some((point, count)) = tally.iter().find(|(_, c)| c % 2 != 0) {
        return Closure::Open { point, count };
    }
    let distinct = tally.distinct();
    if distinct < MIN_POLYGON_POINTS {
        return Closure::Degenerate { distinct };
    }
    Closure::Closed(tally.points())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Stick;
    use crate::tally::StickSet;

    fn closure_of(sticks: &[Stick]) -> Closure {
        let set: StickSet = sticks.iter().copied().collect();
        check_closure(set.tally())
    }

    #[test]
    fn single_zero_length_stick_is_degenerate() {
        assert_eq!(
            closure_of(&[Stick::from_coords(0, 0, 0, 0)]),
            Closure::Degenerate { distinct: 1 }
        );
    }

    #[test]
    fn doubled_stick_is_degenerate() {
        let s = Stick::from_coords(0, 0, 5, 5);
        assert_eq!(
            closure_of(&[s, s.flipped()]),
            Closure::Degenerate { distinct: 2 }
        );
    }

    #[test]
    fn no_sticks_is_degenerate() {
        assert_eq!(closure_of(&[]), Closure::Degenerate { distinct: 0 });
    }

    #[test]
    fn disjoint_sticks_are_open_at_smallest_point() {
        let c = closure_of(&[Stick::from_coords(5, 5, 6, 6), Stick::from_coords(0, 0, 1, 0)]);
        assert_eq!(
            c,
            Closure::Open {
                point: Point::new(0, 0),
                count: 1
            }
        );
    }

    #[test]
    fn triangle_closes_with_sorted_points() {
        let c = closure_of(&[
            Stick::from_coords(0, 0, 4, 0),
            Stick::from_coords(4, 0, 0, 3),
            Stick::from_coords(0, 3, 0, 0),
        ]);
        assert_eq!(
            c.into_points(),
            Some(vec![Point::new(0, 0), Point::new(0, 3), Point::new(4, 0)])
        );
    }

    #[test]
    fn three_sticks_at_one_vertex_are_open_four_are_closed() {
        // Bowtie: two triangles sharing (0,0) → count 4 there, accepted.
        let bowtie = [
            Stick::from_coords(0, 0, 2, 1),
            Stick::from_coords(2, 1, 2, -1),
            Stick::from_coords(2, -1, 0, 0),
            Stick::from_coords(0, 0, -2, 1),
            Stick::from_coords(-2, 1, -2, -1),
            Stick::from_coords(-2, -1, 0, 0),
        ];
        assert!(closure_of(&bowtie).is_closed());
        let claw = [
            Stick::from_coords(0, 0, 1, 0),
            Stick::from_coords(0, 0, 0, 1),
            Stick::from_coords(0, 0, -1, 0),
        ];
        assert!(matches!(
            closure_of(&claw),
            Closure::Open { count: 3, .. }
        ));
    }
}
