//! Orchestration of a segmentation call.
//!
//! - [`params`]: thresholds and their validation.
//! - `pipeline`: the [`Segmenter`] running
//!   `INIT → SPLIT → GRAPH_INIT → MERGE → PAINT` on a fresh context.
//! - `context`: per-call state (integral image, output raster, region graph).

mod context;
pub mod params;
mod pipeline;

pub use params::SegmentParams;
pub use pipeline::Segmenter;
