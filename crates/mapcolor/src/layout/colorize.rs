//! Greedy random coloring in layout order.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Color, Layout, Region, PALETTE};
use crate::error::{Error, Result};

/// Color every uncolored region, in layout order.
///
/// Candidates are the palette minus the colors of neighbors colored so far;
/// one is drawn uniformly from `rng`. Regions that already have a color are
/// left alone. Stops at the first region with no candidate left, keeping the
/// colors assigned before it. Neighbor ids outside the layout are ignored.
pub fn colorize<R: Rng + ?Sized>(layout: &mut Layout, rng: &mut R) -> Result<()> {
    for i in 0..layout.len() {
        let regions = layout.regions_mut();
        if regions[i].color().is_some() {
            continue;
        }
        let taken: Vec<Color> = regions[i]
            .neighbors()
            .iter()
            .filter_map(|n| regions.get(n.0).and_then(Region::color))
            .collect();
        let candidates: Vec<Color> = PALETTE
            .iter()
            .copied()
            .filter(|c| !taken.contains(c))
            .collect();
        let Some(&color) = candidates.choose(&mut *rng) else {
            return Err(Error::EmptyPalette {
                label: regions[i].label().to_string(),
            });
        };
        regions[i].assign_color(color);
        tracing::debug!(
            region = regions[i].label(),
            %color,
            choices = candidates.len(),
            "color"
        );
    }
    Ok(())
}
