use thiserror::Error;

/// Errors returned before any segmentation work is done.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SegmentError {
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    #[error("row stride {stride} is smaller than width {width}")]
    InvalidStride { stride: usize, width: usize },

    #[error("image buffer holds {actual} samples, {needed} required")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("{name} must be a finite value >= 0, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("config error: {0}")]
    Config(String),
}
