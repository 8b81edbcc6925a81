//! Split-and-merge engine.
//!
//! The engine works in four stages over one grayscale raster:
//!
//! - [`split`]: quadtree partition into leaf rectangles whose population
//!   standard deviation is at most the split threshold. Windows that can no
//!   longer be halved (height or width below 2) are leaves regardless of their
//!   contents. Each leaf is painted with its rounded mean.
//! - [`RegionGraph`]: one region per leaf, ids in leaf order, with 4-connected
//!   adjacency between rectangles and exact combined statistics.
//! - [`MergePropagator`]: greedy pairwise merging in ascending id order until a
//!   sweep makes no change.
//! - [`paint`]: every surviving region is written with its area-weighted mean.
//!
//! Statistics are taken over painted leaf values. Once a leaf is painted its
//! samples all equal its rounded mean, so `(area, value)` per rectangle
//! describes the raster exactly and no pixel buffer is walked while merging.
//!
//! Rounding is to the nearest integer with halves going to the even value, so
//! a mean of 2.5 paints 2 and 28.5 paints 28.

mod graph;
mod merge;
mod paint;
mod rect;
mod split;

pub use graph::{Region, RegionGraph, RegionId};
pub use merge::{MergeOutcome, MergePropagator};
pub use paint::{paint, RegionSummary};
pub use rect::{rects_adjacent, Rect};
pub use split::{split, SplitOutcome};
