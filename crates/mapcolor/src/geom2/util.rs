use std::cmp::Ordering;

use super::types::Point2;

/// Sign of the cross product `(b - a) × (c - a)`.
///
/// `Greater` for a counterclockwise turn, `Less` for clockwise, `Equal` when
/// collinear. Evaluated in `i128` so any pair of `i64` differences is exact.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> Ordering {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    (abx * acy - aby * acx).cmp(&0)
}

/// For collinear `a, b, p`: is `p` within the closed segment `[a, b]`?
#[inline]
fn within_span(a: Point2, b: Point2, p: Point2) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Closed segment intersection: proper crossings, touching endpoints, and
/// collinear overlaps all count.
pub fn segments_intersect(a0: Point2, a1: Point2, b0: Point2, b1: Point2) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    let straddle = |x: Ordering, y: Ordering| x.is_ne() && y.is_ne() && x != y;
    if straddle(d1, d2) && straddle(d3, d4) {
        return true;
    }
    (d1.is_eq() && within_span(b0, b1, a0))
        || (d2.is_eq() && within_span(b0, b1, a1))
        || (d3.is_eq() && within_span(a0, a1, b0))
        || (d4.is_eq() && within_span(a0, a1, b1))
}

/// Even-odd ray casting (ray towards +x).
///
/// Only meaningful for points off the boundary; callers check boundary
/// contact first. Exact: the crossing comparison is cross-multiplied.
pub fn point_in_poly(p: Point2, verts: &[Point2]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        if (a.y > p.y) == (b.y > p.y) {
            continue;
        }
        // crossing x > p.x  <=>  (p.x - a.x)*dy  <  (p.y - a.y)*dx   (dy > 0)
        let dy = b.y as i128 - a.y as i128;
        let lhs = (p.x as i128 - a.x as i128) * dy;
        let rhs = (p.y as i128 - a.y as i128) * (b.x as i128 - a.x as i128);
        let crosses = if dy > 0 { lhs < rhs } else { lhs > rhs };
        if crosses {
            inside = !inside;
        }
    }
    inside
}
