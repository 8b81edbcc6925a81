//! Final paint pass: every active region is filled with its area-weighted
//! mean. Leaves that were never merged already hold that value.
use super::graph::{Region, RegionGraph, RegionId};
use crate::image::GrayImageU8;
#[cfg(not(feature = "parallel"))]
use crate::image::ImageViewMut;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// Final state of one surviving region.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub id: RegionId,
    pub area: u64,
    pub rect_count: usize,
    pub mean: f64,
    pub value: u8,
}

impl RegionSummary {
    fn of(region: &Region) -> Self {
        Self {
            id: region.id(),
            area: region.area(),
            rect_count: region.rects().len(),
            mean: region.moments().mean(),
            value: region.fill_value(),
        }
    }
}

/// Paint the fixed point into `out`. The graph is not modified.
pub fn paint(graph: &RegionGraph, out: &mut GrayImageU8) -> Vec<RegionSummary> {
    let active: Vec<&Region> = graph.active_regions().collect();
    let summaries: Vec<RegionSummary> = active.iter().map(|r| RegionSummary::of(r)).collect();
    fill_regions(&active, &summaries, out);
    summaries
}

#[cfg(not(feature = "parallel"))]
fn fill_regions(active: &[&Region], summaries: &[RegionSummary], out: &mut GrayImageU8) {
    for (region, summary) in active.iter().zip(summaries) {
        for rect in region.rects() {
            out.fill_window(rect.col, rect.row, rect.width, rect.height, summary.value);
        }
    }
}

/// Rectangles are bucketed into per-row spans so that every output row can be
/// written by its own task; active regions never overlap, so spans of one row
/// are disjoint.
#[cfg(feature = "parallel")]
fn fill_regions(active: &[&Region], summaries: &[RegionSummary], out: &mut GrayImageU8) {
    let mut spans: Vec<Vec<(usize, usize, u8)>> = vec![Vec::new(); out.height()];
    for (region, summary) in active.iter().zip(summaries) {
        for rect in region.rects() {
            for row in &mut spans[rect.row..rect.bottom()] {
                row.push((rect.col, rect.width, summary.value));
            }
        }
    }
    out.par_rows_mut()
        .zip(spans.par_iter())
        .for_each(|(row, spans)| {
            for &(col, width, value) in spans {
                row[col..col + width].fill(value);
            }
        });
}
