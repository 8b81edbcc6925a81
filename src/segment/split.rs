//! Quadrant splitting.
//!
//! Windows are processed from an explicit stack so the depth of the quadtree
//! never reaches the call stack. Quadrants are pushed in reverse order, which
//! makes the leaf order identical to a recursive top-left, top-right,
//! bottom-left, bottom-right traversal.
//!
//! Odd dimensions: the upper quadrants get `h / 2` rows and the lower ones the
//! remaining `h - h / 2`; likewise the left quadrants get `w / 2` columns and
//! the right ones the rest.
use super::rect::Rect;
use crate::image::{GrayImageU8, ImageViewMut, IntegralImage};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Window {
    row: usize,
    col: usize,
    height: usize,
    width: usize,
}

impl Window {
    fn can_halve(&self) -> bool {
        self.height >= 2 && self.width >= 2
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    fn quadrants(&self) -> [Window; 4] {
        let top = self.height / 2;
        let bottom = self.height - top;
        let left = self.width / 2;
        let right = self.width - left;
        [
            Window {
                row: self.row,
                col: self.col,
                height: top,
                width: left,
            },
            Window {
                row: self.row,
                col: self.col + left,
                height: top,
                width: right,
            },
            Window {
                row: self.row + top,
                col: self.col,
                height: bottom,
                width: left,
            },
            Window {
                row: self.row + top,
                col: self.col + left,
                height: bottom,
                width: right,
            },
        ]
    }
}

/// Leaves of the split stage in traversal order.
#[derive(Clone, Debug, Default)]
pub struct SplitOutcome {
    pub leaves: Vec<Rect>,
    /// Deepest quadtree level that produced a leaf (the whole image is 0).
    pub max_depth: usize,
}

/// Split the whole image.
///
/// Moments are read from `integral` (built over the untouched input), and each
/// leaf is painted into `out` with its rounded mean.
pub fn split(integral: &IntegralImage, out: &mut GrayImageU8, threshold: f64) -> SplitOutcome {
    let root = Window {
        row: 0,
        col: 0,
        height: integral.height(),
        width: integral.width(),
    };
    let mut outcome = SplitOutcome::default();
    let mut stack = vec![(root, 0usize)];

    while let Some((win, depth)) = stack.pop() {
        let moments = integral.window(win.col, win.row, win.width, win.height);
        if moments.stddev() <= threshold || !win.can_halve() {
            let value = moments.rounded_mean();
            out.fill_window(win.col, win.row, win.width, win.height, value);
            outcome.leaves.push(Rect {
                row: win.row,
                col: win.col,
                height: win.height,
                width: win.width,
                mean: moments.mean(),
                value,
            });
            outcome.max_depth = outcome.max_depth.max(depth);
            continue;
        }
        for quad in win.quadrants().into_iter().rev() {
            stack.push((quad, depth + 1));
        }
    }

    debug!(
        "split: {} leaves, max depth {} (threshold {:.3})",
        outcome.leaves.len(),
        outcome.max_depth,
        threshold
    );
    outcome
}
