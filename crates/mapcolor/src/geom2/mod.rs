//! Exact 2D polygon geometry on integer points.
//!
//! Purpose
//! - Provide the vertex-represented polygon `Poly2` and the one predicate the
//!   adjacency builder needs: "do these two closed regions share any point?".
//! - Keep every predicate exact. Coordinates are `i64`, orientation tests are
//!   evaluated in `i128`, so there is no epsilon anywhere in this module.
//! - Input coordinates are bounded by `COORD_LIMIT`; translation saturates
//!   instead of wrapping.
//!
//! Conventions
//! - A polygon is the ordered vertex list; the last vertex connects back to
//!   the first. Orientation (CW/CCW) is not required.
//! - Simple (non-self-intersecting) input is assumed but not validated.
//! - Regions are closed: touching at a single point counts as intersecting.

mod poly;
mod types;
mod util;

pub use poly::Poly2;
pub use types::{in_coord_range, pt, Bbox, Direction, Point2, COORD_LIMIT};
pub use util::{orient, point_in_poly, segments_intersect};
