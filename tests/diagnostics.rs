mod common;

use common::synthetic_image::quadrant_mosaic_u8;
use split_merge::image::ImageU8;
use split_merge::{SegmentParams, Segmenter};

#[test]
fn report_describes_every_stage() {
    let _ = env_logger::builder().is_test(true).try_init();
    let image = quadrant_mosaic_u8(8, [10, 12, 50, 90]);
    let segmenter = Segmenter::new(SegmentParams::new(0.0, 1.5));
    let report = segmenter
        .process_with_diagnostics(ImageU8::packed(8, 8, &image))
        .unwrap();
    let trace = &report.trace;

    assert_eq!(trace.input.width, 8);
    assert_eq!(trace.input.merge_threshold, 1.5);
    assert_eq!(trace.split.leaves, 4);
    assert_eq!(trace.split.max_depth, 1);
    assert_eq!(trace.merge.merges, 1);
    assert_eq!(trace.merge.regions, 3);

    let labels: Vec<&str> = trace.timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["init", "split", "merge", "paint"]);
    assert!(trace.timings.total_ms >= 0.0);
    assert!(trace.timings.stage("merge").is_some());

    let values: Vec<(usize, u64, usize, u8)> = trace
        .regions
        .iter()
        .map(|r| (r.id, r.area, r.rect_count, r.value))
        .collect();
    assert_eq!(values, vec![(0, 32, 2, 11), (2, 16, 1, 50), (3, 16, 1, 90)]);
}

#[test]
fn trace_serializes_to_camel_case_json() {
    let image = quadrant_mosaic_u8(4, [0, 0, 200, 200]);
    let report = Segmenter::default()
        .process_with_diagnostics(ImageU8::packed(4, 4, &image))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["trace"]["split"]["leaves"], 4);
    assert_eq!(json["trace"]["merge"]["regions"], 2);
    assert_eq!(json["trace"]["input"]["splitThreshold"], 10.0);
    assert!(json.get("image").is_none());
}

#[test]
fn process_matches_report_image() {
    let image = quadrant_mosaic_u8(6, [3, 9, 27, 81]);
    let segmenter = Segmenter::new(SegmentParams::new(1.0, 4.0));
    let out = segmenter.process(ImageU8::packed(6, 6, &image)).unwrap();
    let report = segmenter
        .process_with_diagnostics(ImageU8::packed(6, 6, &image))
        .unwrap();
    assert_eq!(out, report.image);
}
