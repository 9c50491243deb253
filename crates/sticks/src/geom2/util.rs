use super::types::Point;

#[inline]
fn cross(a: Point, b: Point, c: Point) -> i128 {
    let (abx, aby) = (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128);
    let (acx, acy) = (c.x as i128 - a.x as i128, c.y as i128 - a.y as i128);
    abx * acy - aby * acx
}

/// Andrew’s monotone chain convex hull on lattice points.
///
/// Returns the strict hull (collinear points dropped) in CCW order, or `None`
/// when fewer than three points are in general position.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}
