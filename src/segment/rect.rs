use crate::stats::Moments;
use serde::Serialize;

/// Leaf rectangle produced by the splitter.
///
/// `mean` is the exact mean of the input samples under the rectangle and
/// `value` is that mean rounded to a sample, i.e. what the output raster holds
/// for the rectangle once it has been split.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
    pub mean: f64,
    pub value: u8,
}

impl Rect {
    #[inline]
    pub fn area(&self) -> u64 {
        (self.height * self.width) as u64
    }

    /// One past the last row.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.row + self.height
    }

    /// One past the last column.
    #[inline]
    pub fn right(&self) -> usize {
        self.col + self.width
    }

    /// Moments of the painted rectangle: `value` repeated `area` times.
    pub fn moments(&self) -> Moments {
        Moments::repeated(self.value, self.area())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.bottom() && col >= self.col && col < self.right()
    }
}

#[inline]
fn ranges_overlap(a0: usize, a1: usize, b0: usize, b1: usize) -> bool {
    a0.max(b0) < a1.min(b1)
}

/// 4-connected adjacency: the rectangles share an edge and their ranges on the
/// other axis overlap by at least one sample. Corner contact does not count.
pub fn rects_adjacent(a: &Rect, b: &Rect) -> bool {
    let side_by_side = a.right() == b.col || b.right() == a.col;
    if side_by_side && ranges_overlap(a.row, a.bottom(), b.row, b.bottom()) {
        return true;
    }
    let stacked = a.bottom() == b.row || b.bottom() == a.row;
    stacked && ranges_overlap(a.col, a.right(), b.col, b.right())
}
