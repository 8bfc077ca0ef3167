//! Polygon layouts: proximity adjacency and greedy four-coloring.
//!
//! Pipeline
//! - `load`: YAML description → `Layout` of labelled regions.
//! - `layout::find_neighbors`: wiggle each region in the four cardinal
//!   directions and record every other region the probes touch.
//! - `layout::colorize`: walk regions in layout order and pick a random color
//!   not yet held by a neighbor.
//! - `render`: rasterize the colored layout to PNG.
//!
//! Geometry is exact: vertices are integer points and all predicates use
//! integer orientation tests (`geom2`).

pub mod error;
pub mod geom2;
pub mod layout;
pub mod load;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom2::{Direction, Poly2};
pub use layout::{colorize, find_neighbors, AdjacencyCfg, Color, Layout, Region, RegionId};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{pt, Direction, Point2, Poly2};
    pub use crate::layout::{
        colorize, find_neighbors, AdjacencyCfg, Color, Layout, Region, RegionId, PALETTE,
    };
    pub use crate::load::{from_yaml_file, from_yaml_str};
    pub use crate::render::{render_layout, save_png, RenderCfg};
    pub use crate::{Error, Result};
}
