//! Memoized hexagon silhouettes.
//!
//! Every cell of a hex grid shares one silhouette, so the vertex ring is
//! computed once per `(circumradius, orientation)` and translated per cell.
//! The table is owned by a [`GridRenderer`](crate::GridRenderer); separate
//! renderers never share entries.

use gridforge_core::{HexOrientation, Point};
use gridforge_geometry::HexMetrics;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Key: circumradius bit pattern plus orientation. Bit patterns keep
/// lookups exact; equal radii always produce identical vertices.
type SilhouetteKey = (u64, HexOrientation);

/// Per-renderer memoization table for hexagon vertex rings.
#[derive(Debug, Default)]
pub struct SilhouetteCache {
    entries: IndexMap<SilhouetteKey, SmallVec<[Point; 6]>>,
    hits: u64,
    misses: u64,
}

impl SilhouetteCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of a hexagon centered on the origin.
    pub fn vertices(&mut self, metrics: &HexMetrics, orientation: HexOrientation) -> &[Point] {
        let key = (metrics.circumradius.to_bits(), orientation);
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries
            .entry(key)
            .or_insert_with(|| metrics.vertices(orientation).into_iter().collect())
    }

    /// Number of distinct silhouettes held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from the table.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to build a silhouette.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
