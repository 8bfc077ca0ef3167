//! Neighbor detection by cardinal wiggle probes.

use super::types::{Layout, RegionId};

/// Adjacency configuration.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyCfg {
    /// Wiggle distance in coordinate units. Gaps up to this wide still count
    /// as contact; larger values risk linking unrelated regions.
    pub amount: i64,
    /// Mirror every hit onto the other region as well. Off by default: the
    /// plain relation is one-directional.
    pub symmetric: bool,
}

impl Default for AdjacencyCfg {
    fn default() -> Self {
        Self {
            amount: 1,
            symmetric: false,
        }
    }
}

/// Populate every region's neighbor set.
///
/// Outer loop over regions in layout order; each region's four probes are
/// tested against every other region's untouched polygon, and hits are
/// written to the outer region only (unless `cfg.symmetric`). Existing
/// neighbors are kept, so a second call changes nothing.
pub fn find_neighbors(layout: &mut Layout, cfg: AdjacencyCfg) {
    let n = layout.len();
    let mut added = 0usize;
    for i in 0..n {
        let hits: Vec<RegionId> = {
            let regions = layout.regions();
            let this = &regions[i];
            let mut hits = Vec::new();
            for (dir, probe) in this.perturbed_copies(cfg.amount) {
                for other in regions {
                    if other.id() == this.id() {
                        continue;
                    }
                    if probe.intersects(other.poly()) {
                        tracing::trace!(
                            region = this.label(),
                            other = other.label(),
                            ?dir,
                            "probe hit"
                        );
                        hits.push(other.id());
                    }
                }
            }
            hits
        };
        let regions = layout.regions_mut();
        let id = regions[i].id();
        for q in hits {
            if regions[i].add_neighbor(q) {
                added += 1;
                tracing::debug!(
                    region = regions[i].label(),
                    neighbor = regions[q.0].label(),
                    "neighbor"
                );
            }
            if cfg.symmetric && regions[q.0].add_neighbor(id) {
                added += 1;
            }
        }
    }
    tracing::info!(
        regions = n,
        added,
        amount = cfg.amount,
        symmetric = cfg.symmetric,
        "adjacency"
    );
}
