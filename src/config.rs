//! JSON loading of [`SegmentParams`].
//!
//! Missing fields fall back to [`SegmentParams::default`]:
//!
//! ```json
//! { "split_threshold": 4.0, "merge_threshold": 2.5 }
//! ```
use crate::error::SegmentError;
use crate::segmenter::SegmentParams;
use std::fs;
use std::path::Path;

/// Parse and validate parameters from a JSON string.
pub fn parse_params(json: &str) -> Result<SegmentParams, SegmentError> {
    let params: SegmentParams = serde_json::from_str(json)
        .map_err(|e| SegmentError::Config(format!("Failed to parse params: {e}")))?;
    params.validate()?;
    Ok(params)
}

/// Read, parse and validate parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<SegmentParams, SegmentError> {
    let data = fs::read_to_string(path).map_err(|e| {
        SegmentError::Config(format!("Failed to read config {}: {e}", path.display()))
    })?;
    parse_params(&data).map_err(|e| match e {
        SegmentError::Config(msg) => SegmentError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let params = parse_params(r#"{ "merge_threshold": 1.5 }"#).unwrap();
        assert_eq!(params.split_threshold, SegmentParams::default().split_threshold);
        assert_eq!(params.merge_threshold, 1.5);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = parse_params(r#"{ "split_threshold": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SegmentError::InvalidThreshold { .. }));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            parse_params("{ split_threshold: }"),
            Err(SegmentError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_params(Path::new("/nonexistent/split_merge.json")).unwrap_err();
        assert!(matches!(err, SegmentError::Config(_)));
    }
}
