//! Diagnostics returned by [`Segmenter::process_with_diagnostics`](crate::Segmenter).
//!
//! `SegmentationReport` bundles the painted raster with a serialisable
//! `SegmentationTrace` describing the split, merge and paint stages.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SegmentationReport, SegmentationTrace, SplitStage};
pub use timing::{StageTiming, TimingBreakdown};
