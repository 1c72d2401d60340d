//! Selection report types.
//!
//! A structured summary of which regions were flagged for review, printable
//! as text or serializable as JSON.

use serde::Serialize;
use std::fmt;

use crate::detection::{DetectedRegion, RegionKind};
use crate::geom::{BBoxXYXY, Normalized};

use super::SelectOptions;

/// The result of running the selector over a detection result.
#[derive(Clone, Debug, Serialize)]
pub struct SelectionReport {
    /// Region kind that was considered.
    pub kind: RegionKind,

    /// Confidence threshold that was applied.
    pub confidence_threshold: f64,

    /// Number of regions in the input, of any kind.
    pub total_regions: usize,

    /// Flagged regions, in input order.
    pub flagged: Vec<FlaggedRegion>,
}

impl SelectionReport {
    /// Creates a new empty report.
    pub fn new(opts: &SelectOptions, total_regions: usize) -> Self {
        Self {
            kind: opts.kind.clone(),
            confidence_threshold: opts.confidence_threshold,
            total_regions,
            flagged: Vec::new(),
        }
    }

    /// Adds a flagged region to the report.
    pub fn add(&mut self, region: FlaggedRegion) {
        self.flagged.push(region);
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    /// Returns true if nothing needs review.
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flagged.is_empty() {
            return writeln!(
                f,
                "Nothing to annotate: no {} regions below {}% confidence ({} region(s) checked)",
                self.kind, self.confidence_threshold, self.total_regions
            );
        }

        writeln!(
            f,
            "{} {} region(s) below {}% confidence (of {} region(s)):",
            self.flagged.len(),
            self.kind,
            self.confidence_threshold,
            self.total_regions
        )?;
        writeln!(f)?;

        for region in &self.flagged {
            writeln!(f, "  {}", region)?;
        }

        Ok(())
    }
}

/// One region flagged for review.
#[derive(Clone, Debug, Serialize)]
pub struct FlaggedRegion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub confidence: f64,

    /// Normalized box enclosing the region's polygon.
    pub bounds: Option<BBoxXYXY<Normalized>>,
}

impl FlaggedRegion {
    /// Summarises a region that passed the selector.
    pub fn from_region(region: &DetectedRegion) -> Self {
        Self {
            id: region.id.clone(),
            text: region.text.clone(),
            confidence: region.confidence.unwrap_or_default(),
            bounds: region.polygon.as_ref().and_then(|p| p.bounds().ok()),
        }
    }
}

impl fmt::Display for FlaggedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>6.2}%]", self.confidence)?;
        match &self.text {
            Some(text) => write!(f, " {:?}", text)?,
            None => write!(f, " <no text>")?,
        }
        if let Some(b) = &self.bounds {
            write!(
                f,
                " at ({:.4}, {:.4})-({:.4}, {:.4})",
                b.min.x, b.min.y, b.max.x, b.max.y
            )?;
        }
        if let Some(id) = &self.id {
            write!(f, " [{}]", id)?;
        }
        Ok(())
    }
}
