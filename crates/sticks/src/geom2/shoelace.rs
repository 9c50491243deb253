//! Shoelace area over a cyclic vertex sequence.
//!
//! Cross products are accumulated exactly in `i128`; the only float step is the
//! final halving, so results are exact while twice the area fits an f64 mantissa.
//! Coordinates near the `i64` limits can push the exact sum past `i128`; those
//! loops are summed in `f64` instead.

use super::types::Point;

/// Twice the signed area of the closed loop `v[0] → v[1] → … → v[n-1] → v[0]`.
/// Positive for counterclockwise loops. `None` when the exact sum leaves `i128`.
pub fn doubled_signed_area(vertices: &[Point]) -> Option<i128> {
    let n = vertices.len();
    if n < 3 {
        return Some(0);
    }
    let mut acc: i128 = 0;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        // i64 × i64 always fits i128; the difference and the running sum may not.
        let term = (p.x as i128 * q.y as i128).checked_sub(q.x as i128 * p.y as i128)?;
        acc = acc.checked_add(term)?;
    }
    Some(acc)
}

fn doubled_signed_area_f64(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64
        })
        .sum()
}

/// Signed area (counterclockwise positive).
pub fn signed_area(vertices: &[Point]) -> f64 {
    match doubled_signed_area(vertices) {
        Some(a2) => a2 as f64 / 2.0,
        None => {
            tracing::debug!(vertices = vertices.len(), "exact shoelace overflowed, using f64");
            doubled_signed_area_f64(vertices) / 2.0
        }
    }
}

/// Enclosed area, independent of orientation.
#[inline]
pub fn area(vertices: &[Point]) -> f64 {
    signed_area(vertices).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn right_triangle_and_orientation() {
        let ccw = pts(&[(0, 0), (4, 0), (0, 3)]);
        assert_eq!(doubled_signed_area(&ccw), Some(12));
        assert_eq!(signed_area(&ccw), 6.0);
        let mut cw = ccw.clone();
        cw.reverse();
        assert_eq!(signed_area(&cw), -6.0);
        assert_eq!(area(&cw), 6.0);
    }

    #[test]
    fn fewer_than_three_vertices_have_no_area() {
        assert_eq!(area(&[]), 0.0);
        assert_eq!(area(&pts(&[(1, 1), (5, 7)])), 0.0);
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let m = i64::MAX / 2;
        let square = pts(&[(0, 0), (m, 0), (m, m), (0, m)]);
        let expected = (m as i128) * (m as i128);
        assert_eq!(doubled_signed_area(&square), Some(2 * expected));
    }

    #[test]
    fn extreme_coordinates_fall_back_to_float() {
        let (lo, hi) = (i64::MIN, i64::MAX);
        let square = pts(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi)]);
        assert_eq!(doubled_signed_area(&square), None);
        let side = u64::MAX as f64;
        let expected = side * side;
        let got = area(&square);
        assert!(((got - expected) / expected).abs() < 1e-9, "{got} vs {expected}");
        assert!(signed_area(&square) > 0.0);
        let mut cw = square.clone();
        cw.reverse();
        assert!(((area(&cw) - got) / got).abs() < 1e-12);
    }
}
