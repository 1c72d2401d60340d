//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! between the two coordinate systems a detection passes through: the
//! detector reports geometry relative to the page, the renderer draws in
//! absolute pixels.

use std::fmt;

/// Marker type for pixel coordinates (absolute values).
///
/// (0, 0) is the top-left corner of the canvas; x grows right, y grows down.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for normalized coordinates (0.0 to 1.0).
///
/// Normalized coordinates are fractions of the image width and height, as
/// reported by text detectors that never see the decoded raster.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
