//! Parameters of a segmentation call.
//!
//! Both thresholds are population standard deviations in sample units.
//! `split_threshold` bounds the spread inside a leaf window, and
//! `merge_threshold` is the strict upper bound on the spread of two regions
//! taken together. A merge threshold of 0 disables merging.

use crate::error::SegmentError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    /// Largest standard deviation a window may have and still be a leaf.
    pub split_threshold: f64,
    /// Regions merge while their combined standard deviation is below this.
    pub merge_threshold: f64,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            split_threshold: 10.0,
            merge_threshold: 10.0,
        }
    }
}

impl SegmentParams {
    pub fn new(split_threshold: f64, merge_threshold: f64) -> Self {
        Self {
            split_threshold,
            merge_threshold,
        }
    }

    /// Both thresholds must be finite and non-negative.
    pub fn validate(&self) -> Result<(), SegmentError> {
        check_threshold("split_threshold", self.split_threshold)?;
        check_threshold("merge_threshold", self.merge_threshold)
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), SegmentError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SegmentError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(SegmentParams::new(0.0, 0.0).validate().is_ok());
        assert!(matches!(
            SegmentParams::new(-0.5, 1.0).validate(),
            Err(SegmentError::InvalidThreshold {
                name: "split_threshold",
                ..
            })
        ));
        assert!(matches!(
            SegmentParams::new(1.0, f64::NAN).validate(),
            Err(SegmentError::InvalidThreshold {
                name: "merge_threshold",
                ..
            })
        ));
        assert!(SegmentParams::new(f64::INFINITY, 1.0).validate().is_err());
    }
}
