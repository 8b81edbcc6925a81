#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod segment;
pub mod segmenter;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{SegmentationReport, SegmentationTrace};
pub use crate::error::SegmentError;
pub use crate::image::{GrayImageU8, ImageU8};
pub use crate::segmenter::{SegmentParams, Segmenter};

/// Segment `image` with the given thresholds.
///
/// Shorthand for `Segmenter::new(SegmentParams::new(..)).process(image)`.
/// The output has the input's dimensions; each pixel holds the value of the
/// region it ended up in.
pub fn segment(
    image: ImageU8,
    split_threshold: f64,
    merge_threshold: f64,
) -> Result<GrayImageU8, SegmentError> {
    Segmenter::new(SegmentParams::new(split_threshold, merge_threshold)).process(image)
}

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageView};
    pub use crate::{segment, SegmentError, SegmentParams, Segmenter};
}
