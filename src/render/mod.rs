//! Review overlay rendering.
//!
//! Loads the source image, pads each selected polygon outward in pixel
//! space and strokes it onto a copy, then writes the copy next to the
//! source under a derived name.

mod canvas;
mod output;
mod style;

pub use canvas::Canvas;
pub use output::{review_output_path, DEFAULT_SUFFIX};
pub use style::{parse_color, StrokeStyle};

use std::path::{Path, PathBuf};

use crate::error::ReviewError;
use crate::geom::{Normalized, Polygon};
use crate::pad::pad;

/// Options for one render call. Styling applies to every polygon alike.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Outward padding in pixels.
    pub margin: f64,

    pub stroke: StrokeStyle,

    /// Inserted between the source file stem and its extension.
    pub suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 5.0,
            stroke: StrokeStyle::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// What an [`annotate`] call produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotateSummary {
    /// Path of the written review copy.
    pub output: PathBuf,

    /// Number of polygons stroked.
    pub drawn: usize,

    /// Number of polygons skipped for having no vertices.
    pub skipped: usize,
}

/// Draws padded outlines of `polygons` on a copy of `source` and writes it
/// to [`review_output_path`].
///
/// Polygons are drawn in order, later ones over earlier ones. Empty
/// polygons are logged and skipped.
///
/// # Errors
/// Returns [`ReviewError::ImageLoad`] if `source` cannot be decoded and
/// [`ReviewError::ImageWrite`] if the review copy cannot be written. No
/// output file exists after a failed call.
pub fn annotate(
    source: &Path,
    polygons: &[Polygon<Normalized>],
    opts: &RenderOptions,
) -> Result<AnnotateSummary, ReviewError> {
    let mut canvas = Canvas::load(source)?;
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let mut drawn = 0;
    let mut skipped = 0;
    for (index, polygon) in polygons.iter().enumerate() {
        match pad(&polygon.to_pixel(width, height), opts.margin) {
            Ok(padded) => {
                canvas.stroke_polygon(&padded, &opts.stroke);
                drawn += 1;
            }
            Err(err) => {
                tracing::warn!(index, "skipping polygon: {}", err);
                skipped += 1;
            }
        }
    }

    let output = review_output_path(source, &opts.suffix);
    canvas.persist(&output)?;

    tracing::info!(
        source = %source.display(),
        output = %output.display(),
        drawn,
        skipped,
        "wrote review image"
    );

    Ok(AnnotateSummary {
        output,
        drawn,
        skipped,
    })
}
