//! Fixed-point region merging.
//!
//! A sweep visits every pair `(a, b)` of active regions with `a < b`, outer and
//! inner loops both in ascending id order. An adjacent pair is merged on the
//! spot when the standard deviation of the two regions together is strictly
//! below the threshold; later pairs of the same sweep see the grown region, so
//! a region can absorb several neighbours in one sweep. Sweeps repeat until one
//! completes without a merge.
//!
//! Each sweep is O(regions² · rects_per_region²).
use super::graph::RegionGraph;
use log::{debug, trace};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// Sweeps run, including the final one without merges.
    pub sweeps: usize,
    pub merges: usize,
    /// Active regions left at the fixed point.
    pub regions: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct MergePropagator {
    threshold: f64,
}

impl MergePropagator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Merge until a full sweep makes no change.
    pub fn run(&self, graph: &mut RegionGraph) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        loop {
            let merged = self.sweep(graph);
            outcome.sweeps += 1;
            outcome.merges += merged;
            debug!(
                "merge sweep {}: {} merges, {} regions active",
                outcome.sweeps,
                merged,
                graph.active_count()
            );
            if merged == 0 {
                break;
            }
        }
        outcome.regions = graph.active_count();
        outcome
    }

    /// One pass over all ordered pairs; returns the number of merges.
    pub fn sweep(&self, graph: &mut RegionGraph) -> usize {
        let n = graph.len();
        let mut merged = 0;
        for a in 0..n {
            if !graph.is_active(a) {
                continue;
            }
            for b in (a + 1)..n {
                if !graph.is_active(b) || !graph.regions_adjacent(a, b) {
                    continue;
                }
                let stats = graph.combined_stats(a, b);
                if stats.stddev < self.threshold {
                    trace!(
                        "merge {} <- {} (mean {:.3}, stddev {:.3})",
                        a,
                        b,
                        stats.mean,
                        stats.stddev
                    );
                    graph.merge(a, b);
                    merged += 1;
                }
            }
        }
        merged
    }
}
