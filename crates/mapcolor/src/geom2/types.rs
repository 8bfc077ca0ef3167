//! Basic 2D types: integer points, cardinal directions, bounding boxes.

use nalgebra::Vector2;

/// Integer point in the plane.
pub type Point2 = Vector2<i64>;

/// Largest coordinate magnitude accepted from input documents.
///
/// Scaled by any `u32` render zoom or shifted by any wiggle of the same
/// magnitude, a bounded coordinate still fits in `i64`.
pub const COORD_LIMIT: i64 = 1 << 30;

/// Whether `c` lies in `-COORD_LIMIT..=COORD_LIMIT`.
#[inline]
pub fn in_coord_range(c: i64) -> bool {
    (-COORD_LIMIT..=COORD_LIMIT).contains(&c)
}

/// Shorthand constructor for `Point2`.
#[inline]
pub fn pt(x: i64, y: i64) -> Point2 {
    Vector2::new(x, y)
}

/// Cardinal direction of a wiggle probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Probe order used by the adjacency builder.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Translation vector for a wiggle of `amount` units (north is +y).
    #[inline]
    pub fn offset(self, amount: i64) -> Point2 {
        let back = amount.saturating_neg();
        match self {
            Direction::North => pt(0, amount),
            Direction::East => pt(amount, 0),
            Direction::South => pt(0, back),
            Direction::West => pt(back, 0),
        }
    }
}

/// Closed axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bbox {
    pub min: Point2,
    pub max: Point2,
}

impl Bbox {
    /// Bounding box of a point set; `None` when empty.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Bbox {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    /// Closed overlap test (shared boundary counts).
    #[inline]
    pub fn overlaps(&self, other: &Bbox) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
