//! Data types for layouts: region ids, colors, regions, and the arena.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::geom2::{Direction, Poly2};

/// Index of a region inside its `Layout`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

/// The four map colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

/// Fixed palette; candidate sets keep this order so seeded runs are stable.
pub const PALETTE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
            Color::Yellow => "YELLOW",
        }
    }

    /// Fill color used by the renderer.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::Red => [255, 0, 0],
            Color::Green => [0, 128, 0],
            Color::Blue => [0, 0, 255],
            Color::Yellow => [255, 255, 0],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One polygon of the layout.
///
/// Invariants:
/// - `neighbors` never contains `id`.
/// - `color` goes from `None` to `Some` at most once.
#[derive(Clone, Debug)]
pub struct Region {
    id: RegionId,
    label: String,
    poly: Poly2,
    color: Option<Color>,
    neighbors: BTreeSet<RegionId>,
}

impl Region {
    fn new(id: RegionId, label: String, poly: Poly2) -> Self {
        Self {
            id,
            label,
            poly,
            color: None,
            neighbors: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn poly(&self) -> &Poly2 {
        &self.poly
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Current neighbor set. Only final once `find_neighbors` has returned.
    #[inline]
    pub fn neighbors(&self) -> &BTreeSet<RegionId> {
        &self.neighbors
    }

    /// Record `other` as adjacent. Returns whether the set grew; a region's
    /// own id is ignored.
    pub fn add_neighbor(&mut self, other: RegionId) -> bool {
        if other == self.id {
            return false;
        }
        self.neighbors.insert(other)
    }

    /// Set the color if none is set yet. Returns `false` (and keeps the old
    /// color) otherwise.
    pub fn assign_color(&mut self, color: Color) -> bool {
        if self.color.is_some() {
            return false;
        }
        self.color = Some(color);
        true
    }

    /// Transient probes: this region's polygon shifted by `amount` in each
    /// cardinal direction.
    pub fn perturbed_copies(&self, amount: i64) -> [(Direction, Poly2); 4] {
        self.poly.wiggle(amount)
    }
}

/// Ordered arena of regions for one run.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    regions: Vec<Region>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region; ids are assigned in insertion order.
    pub fn add_polygon(&mut self, label: impl Into<String>, poly: impl Into<Poly2>) -> RegionId {
        let id = RegionId(self.regions.len());
        self.regions.push(Region::new(id, label.into(), poly.into()));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(id.0)
    }

    pub(crate) fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// First region carrying `label`.
    pub fn find(&self, label: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.label == label)
    }

    /// Labels of `id`'s neighbors, in id order.
    pub fn neighbor_labels(&self, id: RegionId) -> Vec<&str> {
        self.region(id)
            .map(|r| {
                r.neighbors
                    .iter()
                    .filter_map(|n| self.region(*n).map(Region::label))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ordered pairs `(p, q)` with `q` a neighbor of `p` and both holding the
    /// same color.
    pub fn conflicts(&self) -> Vec<(RegionId, RegionId)> {
        let mut out = Vec::new();
        for r in &self.regions {
            let Some(c) = r.color else { continue };
            for n in &r.neighbors {
                if self.region(*n).and_then(Region::color) == Some(c) {
                    out.push((r.id, *n));
                }
            }
        }
        out
    }

    pub fn is_fully_colored(&self) -> bool {
        self.regions.iter().all(|r| r.color.is_some())
    }
}

impl<L: Into<String>, P: Into<Poly2>> FromIterator<(L, P)> for Layout {
    fn from_iter<I: IntoIterator<Item = (L, P)>>(iter: I) -> Self {
        let mut layout = Layout::new();
        for (label, poly) in iter {
            layout.add_polygon(label, poly);
        }
        layout
    }
}
