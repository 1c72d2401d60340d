//! Select, pad and render in one call.
//!
//! ```no_run
//! use std::path::Path;
//! use reviewmark::detection::io_textract::read_textract_json;
//! use reviewmark::pipeline::{run_review, ReviewConfig, ReviewOutcome};
//!
//! let detections = read_textract_json(Path::new("page.json"))?;
//! match run_review(&detections, Path::new("page.jpg"), &ReviewConfig::default())? {
//!     ReviewOutcome::Annotated(summary) => println!("{}", summary.output.display()),
//!     ReviewOutcome::NothingToAnnotate => println!("Nothing to annotate"),
//! }
//! # Ok::<(), reviewmark::ReviewError>(())
//! ```

use std::path::Path;

use crate::detection::DetectionResult;
use crate::error::ReviewError;
use crate::render::{annotate, AnnotateSummary, RenderOptions};
use crate::select::{select_polygons, SelectOptions};

/// Everything that tunes one review run.
///
/// The default is: word regions below 80% confidence, padded by 5 px,
/// stroked 2 px red, written as `<stem>_for_review.<ext>`.
#[derive(Clone, Debug, Default)]
pub struct ReviewConfig {
    pub select: SelectOptions,
    pub render: RenderOptions,
}

/// The outcome of a successful review run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// No region qualified; no file was written.
    NothingToAnnotate,

    /// A review copy was written.
    Annotated(AnnotateSummary),
}

/// Flags low-confidence regions of `detections` on a copy of `source`.
///
/// The source image is not opened when nothing qualifies.
///
/// # Errors
/// Propagates the renderer's [`ReviewError::ImageLoad`] and
/// [`ReviewError::ImageWrite`].
pub fn run_review(
    detections: &DetectionResult,
    source: &Path,
    config: &ReviewConfig,
) -> Result<ReviewOutcome, ReviewError> {
    let polygons = select_polygons(detections, &config.select);
    if polygons.is_empty() {
        tracing::info!(source = %source.display(), "nothing to annotate");
        return Ok(ReviewOutcome::NothingToAnnotate);
    }

    annotate(source, &polygons, &config.render).map(ReviewOutcome::Annotated)
}
