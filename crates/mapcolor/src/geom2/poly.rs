//! Vertex-represented polygon (`Poly2`).

use super::types::{pt, Bbox, Direction, Point2};
use super::util::{point_in_poly, segments_intersect};

/// Closed polygon given by its ordered vertices.
///
/// Invariants (not enforced):
/// - At least 3 vertices for a well-formed polygon; fewer is accepted and
///   behaves as a point or segment in the predicates.
/// - Simple boundary; order matters for edges, orientation does not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poly2 {
    pub vertices: Vec<Point2>,
}

impl Poly2 {
    pub fn new(vertices: Vec<Point2>) -> Self {
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

    /// Boundary edges `(v_k, v_{k+1})`, closing back to the first vertex.
    ///
    /// A single vertex yields one degenerate edge so it still takes part in
    /// segment tests.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }

    #[inline]
    pub fn bbox(&self) -> Option<Bbox> {
        Bbox::of(&self.vertices)
    }

    /// Copy translated by `t`, saturating at the `i64` range.
    ///
    /// Inside `COORD_LIMIT` nothing saturates. Past it a saturated probe
    /// still lies beyond every bounded region, so hits are unaffected.
    pub fn translated(&self, t: Point2) -> Poly2 {
        Poly2 {
            vertices: self
                .vertices
                .iter()
                .map(|v| pt(v.x.saturating_add(t.x), v.y.saturating_add(t.y)))
                .collect(),
        }
    }

    /// Four copies shifted by `amount` in each cardinal direction, in
    /// `Direction::ALL` order.
    pub fn wiggle(&self, amount: i64) -> [(Direction, Poly2); 4] {
        Direction::ALL.map(|d| (d, self.translated(d.offset(amount))))
    }

    /// Strict interior test (boundary points are not "inside").
    #[inline]
    pub fn contains_strict(&self, p: Point2) -> bool {
        point_in_poly(p, &self.vertices)
    }

    /// Do the closed regions share at least one point?
    ///
    /// Edge contact (crossing, touching, or collinear overlap) is checked
    /// first; with no boundary contact the regions intersect only if one lies
    /// inside the other, which a single vertex decides.
    pub fn intersects(&self, other: &Poly2) -> bool {
        let (Some(ba), Some(bb)) = (self.bbox(), other.bbox()) else {
            return false;
        };
        if !ba.overlaps(&bb) {
            return false;
        }
        for (a0, a1) in self.edges() {
            for (b0, b1) in other.edges() {
                if segments_intersect(a0, a1, b0, b1) {
                    return true;
                }
            }
        }
        other.contains_strict(self.vertices[0]) || self.contains_strict(other.vertices[0])
    }
}

impl From<Vec<Point2>> for Poly2 {
    fn from(vertices: Vec<Point2>) -> Self {
        Self::new(vertices)
    }
}
