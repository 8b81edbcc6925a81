//! Region adjacency graph over leaf rectangles.
//!
//! Regions are stored densely by id. A merge moves every rectangle of the
//! absorbed region into the surviving one and leaves the absorbed slot empty;
//! empty slots are dissolved for the rest of the call and never reused.
use super::rect::{rects_adjacent, Rect};
use crate::stats::{Moments, Stats};

pub type RegionId = usize;

/// A set of rectangles treated as one segment.
///
/// `moments` accumulates the painted values of all member rectangles, so the
/// combined statistics of two regions are available without walking pixels.
#[derive(Clone, Debug)]
pub struct Region {
    id: RegionId,
    rects: Vec<Rect>,
    moments: Moments,
}

impl Region {
    fn from_leaf(id: RegionId, rect: Rect) -> Self {
        Self {
            id,
            moments: rect.moments(),
            rects: vec![rect],
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn moments(&self) -> &Moments {
        &self.moments
    }

    pub fn area(&self) -> u64 {
        self.moments.area
    }

    pub fn is_active(&self) -> bool {
        !self.rects.is_empty()
    }

    /// Area-weighted mean of the member rectangles, rounded to a sample.
    pub fn fill_value(&self) -> u8 {
        self.moments.rounded_mean()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegionGraph {
    regions: Vec<Region>,
}

impl RegionGraph {
    /// One region per leaf; ids follow the leaf order.
    pub fn from_leaves(leaves: Vec<Rect>) -> Self {
        let regions = leaves
            .into_iter()
            .enumerate()
            .map(|(id, rect)| Region::from_leaf(id, rect))
            .collect();
        Self { regions }
    }

    /// Number of ids ever allocated, dissolved regions included.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn is_active(&self, id: RegionId) -> bool {
        self.regions.get(id).is_some_and(Region::is_active)
    }

    pub fn active_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.is_active())
    }

    pub fn active_ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.active_regions().map(Region::id)
    }

    pub fn active_count(&self) -> usize {
        self.active_regions().count()
    }

    /// True if any rectangle of `a` is edge-adjacent to any rectangle of `b`.
    pub fn regions_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        let (Some(ra), Some(rb)) = (self.regions.get(a), self.regions.get(b)) else {
            return false;
        };
        ra.rects
            .iter()
            .any(|x| rb.rects.iter().any(|y| rects_adjacent(x, y)))
    }

    /// Population statistics of both regions taken together.
    pub fn combined_stats(&self, a: RegionId, b: RegionId) -> Stats {
        self.regions[a]
            .moments
            .combined(&self.regions[b].moments)
            .stats()
    }

    /// Move every rectangle of `b` into `a` and dissolve `b`.
    pub fn merge(&mut self, a: RegionId, b: RegionId) {
        debug_assert_ne!(a, b, "a region cannot absorb itself");
        let rects = std::mem::take(&mut self.regions[b].rects);
        let moments = std::mem::take(&mut self.regions[b].moments);
        let target = &mut self.regions[a];
        target.rects.extend(rects);
        target.moments.absorb(&moments);
    }
}
