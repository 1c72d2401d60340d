use std::path::PathBuf;
use thiserror::Error;

/// The main error type for reviewmark operations.
///
/// Everything here is fatal to the current call. Per-polygon malformation is
/// reported as [`EmptyPolygon`](crate::geom::EmptyPolygon) and recovered
/// inside the renderer, so it never shows up in this enum.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("Failed to read detections from {path}: {source}")]
    DetectionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to parse detection JSON from {path}: {source}")]
    DetectionParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[source] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
