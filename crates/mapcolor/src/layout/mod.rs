//! Layout of labelled regions: adjacency by wiggling, then greedy coloring.
//!
//! Purpose
//! - Hold the regions of one run in an arena (`Layout`), addressed by
//!   `RegionId`. Identity is index equality, never vertex equality.
//! - `find_neighbors`: translate each region by a fixed amount north, east,
//!   south and west, and record every other region a probe touches.
//! - `colorize`: walk regions in layout order and pick a random palette
//!   color not already held by a neighbor.
//!
//! Behavior worth knowing
//! - Neighbor sets are written one-directionally: only the region whose
//!   probes hit records the other. `AdjacencyCfg::symmetric` mirrors each hit
//!   instead; it is off by default.
//! - Coloring is greedy and never revisits a region. With one-directional
//!   neighbors two "neighbors" can share a color; `Layout::conflicts` reports
//!   such pairs.
//! - Running out of colors is an error (`Error::EmptyPalette`), not a
//!   fallback to a repeated color.

mod adjacency;
mod colorize;
mod types;

pub use adjacency::{find_neighbors, AdjacencyCfg};
pub use colorize::colorize;
pub use types::{Color, Layout, Region, RegionId, PALETTE};
