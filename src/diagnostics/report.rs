use super::TimingBreakdown;
use crate::image::GrayImageU8;
use crate::segment::{MergeOutcome, RegionSummary};
use serde::Serialize;

/// Result of [`Segmenter::process_with_diagnostics`](crate::Segmenter).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationReport {
    #[serde(skip)]
    pub image: GrayImageU8,
    pub trace: SegmentationTrace,
}

/// What each stage of one call did.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub split: SplitStage,
    pub merge: MergeOutcome,
    pub regions: Vec<RegionSummary>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub split_threshold: f64,
    pub merge_threshold: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitStage {
    pub leaves: usize,
    pub max_depth: usize,
}

impl SegmentationTrace {
    /// Number of segments in the output.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
