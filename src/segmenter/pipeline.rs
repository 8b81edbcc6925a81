//! Segmenter driving one split-and-merge call end-to-end.
//!
//! ```
//! use split_merge::image::ImageU8;
//! use split_merge::{SegmentParams, Segmenter};
//!
//! let data = [2u8, 1, 2, 45, 40, 50, 45, 40, 50];
//! let segmenter = Segmenter::new(SegmentParams::new(10.0, 10.0));
//! let report = segmenter
//!     .process_with_diagnostics(ImageU8::packed(3, 3, &data))
//!     .unwrap();
//! assert_eq!(report.image.data(), &[2, 2, 2, 45, 45, 45, 45, 45, 45]);
//! assert_eq!(report.trace.region_count(), 2);
//! ```
use super::context::SegmentContext;
use super::params::SegmentParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, SegmentationReport, SegmentationTrace, TimingBreakdown};
use crate::error::SegmentError;
use crate::image::{GrayImageU8, ImageU8};
use log::debug;
use std::time::Instant;

/// Split-and-merge segmenter. Holds parameters only; every call works on a
/// fresh `SegmentContext`.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    params: SegmentParams,
}

impl Segmenter {
    pub fn new(params: SegmentParams) -> Self {
        Self { params }
    }

    /// Segment a grayscale image and return the painted raster.
    pub fn process(&self, gray: ImageU8) -> Result<GrayImageU8, SegmentError> {
        self.process_with_diagnostics(gray).map(|report| report.image)
    }

    /// Segment a grayscale image and return the raster with a stage trace.
    pub fn process_with_diagnostics(
        &self,
        gray: ImageU8,
    ) -> Result<SegmentationReport, SegmentError> {
        self.params.validate()?;
        gray.validate()?;

        let SegmentParams {
            split_threshold,
            merge_threshold,
        } = self.params;
        debug!(
            "Segmenter::process start w={} h={} split={:.3} merge={:.3}",
            gray.w, gray.h, split_threshold, merge_threshold
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let mut ctx = timings.measure("init", || SegmentContext::new(&gray));
        let split = timings.measure("split", || ctx.split(split_threshold));
        let merge = timings.measure("merge", || ctx.merge(merge_threshold));
        let regions = timings.measure("paint", || ctx.paint());
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "Segmenter::process done leaves={} sweeps={} regions={} total_ms={:.3}",
            split.leaves,
            merge.sweeps,
            regions.len(),
            timings.total_ms
        );

        let trace = SegmentationTrace {
            input: InputDescriptor {
                width: gray.w,
                height: gray.h,
                split_threshold,
                merge_threshold,
            },
            timings,
            split,
            merge,
            regions,
        };
        Ok(SegmentationReport {
            image: ctx.into_image(),
            trace,
        })
    }
}
