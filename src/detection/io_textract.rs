//! AWS Textract `DetectDocumentText` JSON reader.
//!
//! Textract reports every recognized unit as a "block":
//!
//! ```json
//! {
//!   "Blocks": [{
//!     "BlockType": "WORD",
//!     "Id": "5f1c...",
//!     "Text": "Total",
//!     "Confidence": 74.2,
//!     "Geometry": {
//!       "BoundingBox": { "Width": 0.1, "Height": 0.02, "Left": 0.3, "Top": 0.4 },
//!       "Polygon": [{ "X": 0.3, "Y": 0.4 }, { "X": 0.4, "Y": 0.4 }, ...]
//!     }
//!   }]
//! }
//! ```
//!
//! Geometry is normalized to the page. Any block field may be missing; a
//! missing field becomes `None` on the [`DetectedRegion`] rather than an
//! error, and block order is preserved.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::model::{DetectedRegion, DetectionResult, RegionKind};
use crate::error::ReviewError;
use crate::geom::{BBoxXYXY, Normalized, Point, Polygon};

// ============================================================================
// Textract Schema Types (internal to this module)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TextractResponse {
    #[serde(default)]
    blocks: Vec<TextractBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TextractBlock {
    block_type: String,

    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    text: Option<String>,

    #[serde(default)]
    confidence: Option<f64>,

    #[serde(default)]
    geometry: Option<TextractGeometry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TextractGeometry {
    #[serde(default)]
    bounding_box: Option<TextractBoundingBox>,

    #[serde(default)]
    polygon: Option<Vec<TextractPoint>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TextractBoundingBox {
    width: f64,
    height: f64,
    left: f64,
    top: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TextractPoint {
    x: f64,
    y: f64,
}

// ============================================================================
// Public API
// ============================================================================

/// Reads a detection result from a Textract JSON response file.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a Textract response.
pub fn read_textract_json(path: &Path) -> Result<DetectionResult, ReviewError> {
    let file = File::open(path).map_err(|source| ReviewError::DetectionRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let response: TextractResponse =
        serde_json::from_reader(reader).map_err(|source| ReviewError::DetectionParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(textract_to_result(response))
}

/// Parses a Textract JSON response from a string.
///
/// Useful for testing without file I/O.
pub fn from_textract_str(json: &str) -> Result<DetectionResult, serde_json::Error> {
    let response: TextractResponse = serde_json::from_str(json)?;
    Ok(textract_to_result(response))
}

/// Parses a Textract JSON response from raw bytes.
///
/// Useful for fuzzing and for responses received over the wire.
pub fn from_textract_slice(bytes: &[u8]) -> Result<DetectionResult, serde_json::Error> {
    let response: TextractResponse = serde_json::from_slice(bytes)?;
    Ok(textract_to_result(response))
}

// ============================================================================
// Conversion
// ============================================================================

fn textract_to_result(response: TextractResponse) -> DetectionResult {
    DetectionResult::new(response.blocks.into_iter().map(block_to_region).collect())
}

fn block_to_region(block: TextractBlock) -> DetectedRegion {
    let (polygon, bounding_box) = match block.geometry {
        Some(geometry) => (
            geometry.polygon.map(|points| {
                points
                    .into_iter()
                    .map(|p| Point::<Normalized>::new(p.x, p.y))
                    .collect::<Polygon<Normalized>>()
            }),
            geometry
                .bounding_box
                .map(|b| BBoxXYXY::from_xywh(b.left, b.top, b.width, b.height)),
        ),
        None => (None, None),
    };

    DetectedRegion {
        id: block.id,
        kind: RegionKind::from(block.block_type),
        text: block.text,
        confidence: block.confidence,
        polygon,
        bounding_box,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "DocumentMetadata": { "Pages": 1 },
        "Blocks": [
            {
                "BlockType": "PAGE",
                "Id": "p1",
                "Geometry": {
                    "BoundingBox": { "Width": 1.0, "Height": 1.0, "Left": 0.0, "Top": 0.0 },
                    "Polygon": [{ "X": 0.0, "Y": 0.0 }, { "X": 1.0, "Y": 0.0 }, { "X": 1.0, "Y": 1.0 }, { "X": 0.0, "Y": 1.0 }]
                }
            },
            {
                "BlockType": "WORD",
                "Id": "w1",
                "Text": "Total",
                "Confidence": 74.25,
                "TextType": "PRINTED",
                "Geometry": {
                    "BoundingBox": { "Width": 0.2, "Height": 0.1, "Left": 0.3, "Top": 0.4 },
                    "Polygon": [{ "X": 0.3, "Y": 0.4 }, { "X": 0.5, "Y": 0.4 }, { "X": 0.5, "Y": 0.5 }, { "X": 0.3, "Y": 0.5 }]
                }
            },
            { "BlockType": "WORD", "Text": "floating" }
        ]
    }"#;

    #[test]
    fn test_parses_blocks_in_order() {
        let result = from_textract_str(SAMPLE).expect("parse textract");
        assert_eq!(result.len(), 3);
        assert_eq!(result.regions[0].kind, RegionKind::Page);
        assert_eq!(result.regions[1].kind, RegionKind::Word);
        assert_eq!(result.regions[2].kind, RegionKind::Word);
    }

    #[test]
    fn test_maps_geometry_and_confidence() {
        let result = from_textract_str(SAMPLE).expect("parse textract");
        let word = &result.regions[1];
        assert_eq!(word.id.as_deref(), Some("w1"));
        assert_eq!(word.text.as_deref(), Some("Total"));
        assert_eq!(word.confidence, Some(74.25));

        let polygon = word.polygon.as_ref().expect("polygon");
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.vertices()[1].x, 0.5);

        let bbox = word.bounding_box.expect("bbox");
        assert!((bbox.max.x - 0.5).abs() < 1e-12);
        assert!((bbox.max.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_missing_fields_become_none() {
        let result = from_textract_str(SAMPLE).expect("parse textract");
        let word = &result.regions[2];
        assert!(word.confidence.is_none());
        assert!(word.polygon.is_none());
        assert!(word.bounding_box.is_none());
    }

    #[test]
    fn test_missing_blocks_is_empty_result() {
        let result = from_textract_str("{}").expect("parse textract");
        assert!(result.is_empty());
    }

    #[test]
    fn test_rejects_non_json() {
        assert!(from_textract_slice(b"not json").is_err());
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let path = Path::new("no/such/dir/textract.json");
        let err = read_textract_json(path).unwrap_err();

        match &err {
            ReviewError::DetectionRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected DetectionRead, got {other:?}"),
        }
        assert!(err.to_string().contains("no/such/dir/textract.json"));
    }
}
