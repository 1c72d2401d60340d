//! Detection results consumed by the review pipeline.
//!
//! The detector itself lives outside this crate. This module defines the
//! shape of its output and reads it from the JSON that AWS Textract
//! returns.

pub mod io_textract;
mod model;

pub use model::{DetectedRegion, DetectionResult, RegionKind};
