//! Summed-area tables of sample values and squared sample values.
//!
//! Built once per call from the read-only input so that the moments of any
//! axis-aligned window are available in O(1), regardless of how the output
//! raster is overwritten while splitting.
use super::{ImageU8, ImageView};
use crate::stats::Moments;

/// Integral images of Σv and Σv² with a zero guard row and column.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    w: usize,
    h: usize,
    sum: Vec<u64>,
    sum_sq: Vec<u64>,
}

impl IntegralImage {
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let (w, h) = (view.width(), view.height());
        let iw = w + 1;
        let mut sum = vec![0u64; iw * (h + 1)];
        let mut sum_sq = vec![0u64; iw * (h + 1)];
        for (y, row) in view.rows().enumerate() {
            let mut row_sum = 0u64;
            let mut row_sq = 0u64;
            for (x, &px) in row.iter().enumerate() {
                let v = u64::from(px);
                row_sum += v;
                row_sq += v * v;
                let idx = (y + 1) * iw + (x + 1);
                sum[idx] = sum[idx - iw] + row_sum;
                sum_sq[idx] = sum_sq[idx - iw] + row_sq;
            }
        }
        Self { w, h, sum, sum_sq }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Moments of the window `[x, x + w) × [y, y + h)`.
    pub fn window(&self, x: usize, y: usize, w: usize, h: usize) -> Moments {
        debug_assert!(x + w <= self.w && y + h <= self.h);
        let iw = self.w + 1;
        let (x1, y1) = (x + w, y + h);
        let rect = |t: &[u64]| t[y1 * iw + x1] + t[y * iw + x] - t[y * iw + x1] - t[y1 * iw + x];
        Moments {
            area: (w * h) as u64,
            sum: rect(self.sum.as_slice()),
            sum_sq: rect(self.sum_sq.as_slice()),
        }
    }
}
