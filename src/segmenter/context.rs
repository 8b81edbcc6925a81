//! Per-call engine state.
//!
//! A `SegmentContext` owns everything one call needs: the integral image of
//! the input, the output raster and the region graph. It is built at the
//! start of a call and dropped when the call returns.
use crate::diagnostics::SplitStage;
use crate::image::{GrayImageU8, ImageU8, IntegralImage};
use crate::segment::{self, MergeOutcome, MergePropagator, RegionGraph, RegionSummary};

pub(crate) struct SegmentContext {
    integral: IntegralImage,
    output: GrayImageU8,
    graph: RegionGraph,
}

impl SegmentContext {
    pub(crate) fn new(image: &ImageU8<'_>) -> Self {
        Self {
            integral: IntegralImage::from_view(image),
            output: GrayImageU8::from_view(image),
            graph: RegionGraph::default(),
        }
    }

    /// Split the raster and seed the graph with one region per leaf.
    pub(crate) fn split(&mut self, threshold: f64) -> SplitStage {
        let outcome = segment::split(&self.integral, &mut self.output, threshold);
        let stage = SplitStage {
            leaves: outcome.leaves.len(),
            max_depth: outcome.max_depth,
        };
        self.graph = RegionGraph::from_leaves(outcome.leaves);
        stage
    }

    pub(crate) fn merge(&mut self, threshold: f64) -> MergeOutcome {
        MergePropagator::new(threshold).run(&mut self.graph)
    }

    pub(crate) fn paint(&mut self) -> Vec<RegionSummary> {
        segment::paint(&self.graph, &mut self.output)
    }

    pub(crate) fn into_image(self) -> GrayImageU8 {
        self.output
    }
}
