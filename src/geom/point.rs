//! Typed 2D points using PhantomData for compile-time space safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::space::{Normalized, Pixel};

/// A 2D point with a type-level marker for the coordinate space.
///
/// The `TSpace` parameter is either [`Pixel`] or [`Normalized`]; points from
/// different spaces cannot be combined without an explicit conversion.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Point<TSpace> {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Point<Normalized> {
    /// Scales a normalized point by the canvas dimensions.
    #[inline]
    pub fn to_pixel(&self, image_width: f64, image_height: f64) -> Point<Pixel> {
        Point::new(self.x * image_width, self.y * image_height)
    }
}

impl<TSpace> std::fmt::Debug for Point<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Point<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Point<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct PointData {
            x: f64,
            y: f64,
        }
        let data = PointData::deserialize(deserializer)?;
        Ok(Point::new(data.x, data.y))
    }
}
