//! Region selection for review.
//!
//! Picks out the detections a human should look at: regions of a given
//! kind whose confidence is known and below a threshold, and which carry a
//! usable outline. Anything else is dropped silently; an empty selection is
//! a normal outcome, not an error.

mod report;

pub use report::{FlaggedRegion, SelectionReport};

use crate::detection::{DetectedRegion, DetectionResult, RegionKind};
use crate::geom::{Normalized, Polygon};

/// Options for region selection.
#[derive(Clone, Debug)]
pub struct SelectOptions {
    /// Only regions of this kind are considered.
    pub kind: RegionKind,

    /// Confidence percentage (0-100). Regions strictly below it are flagged.
    pub confidence_threshold: f64,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            kind: RegionKind::Word,
            confidence_threshold: 80.0,
        }
    }
}

/// Returns true if `region` needs review under `opts`.
pub fn is_flagged(region: &DetectedRegion, opts: &SelectOptions) -> bool {
    region.kind == opts.kind
        && region
            .confidence
            .is_some_and(|c| c < opts.confidence_threshold)
        && region.polygon.as_ref().is_some_and(|p| !p.is_empty())
}

/// Returns the regions that need review, in input order.
pub fn flagged_regions<'a>(
    result: &'a DetectionResult,
    opts: &SelectOptions,
) -> Vec<&'a DetectedRegion> {
    result
        .regions
        .iter()
        .filter(|region| is_flagged(region, opts))
        .collect()
}

/// Returns the normalized outlines of the regions that need review, in
/// input order.
pub fn select_polygons(result: &DetectionResult, opts: &SelectOptions) -> Vec<Polygon<Normalized>> {
    let polygons: Vec<_> = flagged_regions(result, opts)
        .into_iter()
        .filter_map(|region| region.polygon.clone())
        .collect();

    tracing::debug!(
        total = result.len(),
        flagged = polygons.len(),
        kind = %opts.kind,
        threshold = opts.confidence_threshold,
        "selected regions for review"
    );

    polygons
}

/// Builds a report describing which regions were flagged.
pub fn build_report(result: &DetectionResult, opts: &SelectOptions) -> SelectionReport {
    let mut report = SelectionReport::new(opts, result.len());
    for region in flagged_regions(result, opts) {
        report.add(FlaggedRegion::from_region(region));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon<Normalized> {
        Polygon::from_xy(&[(0.1, 0.1), (0.2, 0.1), (0.2, 0.2), (0.1, 0.2)])
    }

    fn word(conf: f64) -> DetectedRegion {
        DetectedRegion::new(RegionKind::Word)
            .with_confidence(conf)
            .with_polygon(square())
    }

    #[test]
    fn test_only_low_confidence_words_are_selected() {
        let result = DetectionResult::new(vec![
            word(75.0).with_id("keep"),
            word(90.0),
            DetectedRegion::new(RegionKind::Line)
                .with_confidence(50.0)
                .with_polygon(square()),
        ]);

        let flagged = flagged_regions(&result, &SelectOptions::default());
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].id.as_deref(), Some("keep"));

        let polygons = select_polygons(&result, &SelectOptions::default());
        assert_eq!(polygons, vec![square()]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let result = DetectionResult::new(vec![word(80.0), word(79.999)]);
        let polygons = select_polygons(&result, &SelectOptions::default());
        assert_eq!(polygons.len(), 1);
    }

    #[test]
    fn test_missing_confidence_is_not_selected() {
        let region = DetectedRegion::new(RegionKind::Word).with_polygon(square());
        assert!(!is_flagged(&region, &SelectOptions::default()));
    }

    #[test]
    fn test_missing_or_empty_polygon_is_not_selected() {
        let missing = DetectedRegion::new(RegionKind::Word).with_confidence(10.0);
        let empty = DetectedRegion::new(RegionKind::Word)
            .with_confidence(10.0)
            .with_polygon(Polygon::new(vec![]));
        let result = DetectionResult::new(vec![missing, empty]);
        assert!(select_polygons(&result, &SelectOptions::default()).is_empty());
    }

    #[test]
    fn test_order_matches_input() {
        let first = Polygon::from_xy(&[(0.1, 0.1)]);
        let second = Polygon::from_xy(&[(0.9, 0.9)]);
        let result = DetectionResult::new(vec![
            DetectedRegion::new(RegionKind::Word)
                .with_confidence(10.0)
                .with_polygon(first.clone()),
            word(99.0),
            DetectedRegion::new(RegionKind::Word)
                .with_confidence(20.0)
                .with_polygon(second.clone()),
        ]);
        assert_eq!(
            select_polygons(&result, &SelectOptions::default()),
            vec![first, second]
        );
    }

    #[test]
    fn test_custom_kind_and_threshold() {
        let result = DetectionResult::new(vec![
            word(75.0),
            DetectedRegion::new(RegionKind::Line)
                .with_confidence(94.0)
                .with_polygon(square()),
        ]);
        let opts = SelectOptions {
            kind: RegionKind::Line,
            confidence_threshold: 95.0,
        };
        assert_eq!(select_polygons(&result, &opts).len(), 1);
    }

    #[test]
    fn test_build_report_counts() {
        let result = DetectionResult::new(vec![word(75.0).with_text("Tota1"), word(90.0)]);
        let report = build_report(&result, &SelectOptions::default());
        assert_eq!(report.total_regions, 2);
        assert_eq!(report.flagged_count(), 1);
        assert_eq!(report.flagged[0].text.as_deref(), Some("Tota1"));
    }
}
