//! Detection result model.
//!
//! A [`DetectionResult`] is what a text detector hands to the review
//! pipeline: a flat, ordered list of regions with their classification,
//! confidence and normalized geometry. Every field the detector may omit is
//! an `Option`, so partial output can still be represented and filtered.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::geom::{BBoxXYXY, Normalized, Polygon};

/// The granularity of a detected region.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionKind {
    Page,
    Line,
    Word,
    /// Any block type this crate does not treat specially (tables, cells,
    /// key-value sets, ...). Stored upper-cased.
    Other(String),
}

impl RegionKind {
    pub fn as_str(&self) -> &str {
        match self {
            RegionKind::Page => "PAGE",
            RegionKind::Line => "LINE",
            RegionKind::Word => "WORD",
            RegionKind::Other(name) => name,
        }
    }

    fn from_name(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        let known = match upper.as_str() {
            "PAGE" => Some(RegionKind::Page),
            "LINE" => Some(RegionKind::Line),
            "WORD" => Some(RegionKind::Word),
            _ => None,
        };
        known.unwrap_or(RegionKind::Other(upper))
    }
}

impl FromStr for RegionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for RegionKind {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<RegionKind> for String {
    fn from(kind: RegionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single region reported by the detector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectedRegion {
    /// Detector-assigned identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Classification of the region (line, word, ...).
    pub kind: RegionKind,

    /// Recognized text, if the detector reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Confidence on a 0-100 scale. `None` means unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Outline in normalized coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon<Normalized>>,

    /// Axis-aligned box in normalized coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BBoxXYXY<Normalized>>,
}

impl DetectedRegion {
    /// Creates a region with only a kind; everything else unknown.
    pub fn new(kind: RegionKind) -> Self {
        Self {
            id: None,
            kind,
            text: None,
            confidence: None,
            polygon: None,
            bounding_box: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_polygon(mut self, polygon: Polygon<Normalized>) -> Self {
        self.polygon = Some(polygon);
        self
    }

    pub fn with_bounding_box(mut self, bbox: BBoxXYXY<Normalized>) -> Self {
        self.bounding_box = Some(bbox);
        self
    }
}

/// The ordered output of one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    pub regions: Vec<DetectedRegion>,
}

impl DetectionResult {
    pub fn new(regions: Vec<DetectedRegion>) -> Self {
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_kind_parse_is_case_insensitive() {
        assert_eq!("word".parse::<RegionKind>().unwrap(), RegionKind::Word);
        assert_eq!("LINE".parse::<RegionKind>().unwrap(), RegionKind::Line);
        assert_eq!(
            "key_value_set".parse::<RegionKind>().unwrap(),
            RegionKind::Other("KEY_VALUE_SET".into())
        );
    }

    #[test]
    fn test_region_kind_serde_uses_block_type_names() {
        let json = serde_json::to_string(&RegionKind::Word).unwrap();
        assert_eq!(json, "\"WORD\"");
        let kind: RegionKind = serde_json::from_str("\"Cell\"").unwrap();
        assert_eq!(kind, RegionKind::Other("CELL".into()));
    }

    #[test]
    fn test_region_builder_pattern() {
        let region = DetectedRegion::new(RegionKind::Word)
            .with_id("w-1")
            .with_text("invoice")
            .with_confidence(72.5)
            .with_polygon(Polygon::from_xy(&[(0.1, 0.1), (0.2, 0.1)]));

        assert_eq!(region.id.as_deref(), Some("w-1"));
        assert_eq!(region.confidence, Some(72.5));
        assert_eq!(region.polygon.map(|p| p.len()), Some(2));
        assert!(region.bounding_box.is_none());
    }
}
