//! Ordered vertex sequences.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bbox::BBoxXYXY;
use super::point::Point;
use super::space::{Normalized, Pixel};

/// Raised when an operation needs at least one vertex and the polygon has none.
///
/// Detector output can carry empty geometry, so this is recoverable: callers
/// skip the offending polygon and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("polygon has no vertices")]
pub struct EmptyPolygon;

/// An ordered sequence of vertices, implicitly closed when drawn.
///
/// Construction is permissive: an empty polygon can be represented so that
/// malformed detections survive parsing. Operations that need a vertex
/// return [`EmptyPolygon`] instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Polygon<TSpace> {
    vertices: Vec<Point<TSpace>>,
}

impl<TSpace> Polygon<TSpace> {
    /// Creates a polygon from its vertices, in drawing order.
    pub fn new(vertices: Vec<Point<TSpace>>) -> Self {
        Self { vertices }
    }

    /// Creates a polygon from `(x, y)` pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    pub fn vertices(&self) -> &[Point<TSpace>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the closed outline as `(from, to)` pairs, ending with the
    /// segment from the last vertex back to the first.
    ///
    /// A single-vertex polygon yields one zero-length segment.
    pub fn edges(&self) -> impl Iterator<Item = (&Point<TSpace>, &Point<TSpace>)> {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Arithmetic mean of the vertex coordinates.
    ///
    /// This is the vertex centroid, not the area centroid. The two agree for
    /// parallelograms, which covers nearly all text-region quadrilaterals.
    pub fn centroid(&self) -> Result<Point<TSpace>, EmptyPolygon> {
        if self.vertices.is_empty() {
            return Err(EmptyPolygon);
        }
        let n = self.vertices.len() as f64;
        let (sum_x, sum_y) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Ok(Point::new(sum_x / n, sum_y / n))
    }

    /// The axis-aligned box enclosing every vertex.
    pub fn bounds(&self) -> Result<BBoxXYXY<TSpace>, EmptyPolygon> {
        let first = self.vertices.first().ok_or(EmptyPolygon)?;
        let init = (first.x, first.y, first.x, first.y);
        let (xmin, ymin, xmax, ymax) = self.vertices.iter().fold(init, |acc, p| {
            (acc.0.min(p.x), acc.1.min(p.y), acc.2.max(p.x), acc.3.max(p.y))
        });
        Ok(BBoxXYXY::from_xyxy(xmin, ymin, xmax, ymax))
    }
}

impl Polygon<Normalized> {
    /// Converts every vertex to pixel coordinates for a canvas of the given size.
    ///
    /// This is the only conversion between spaces; there is no way back.
    pub fn to_pixel(&self, image_width: f64, image_height: f64) -> Polygon<Pixel> {
        self.vertices
            .iter()
            .map(|p| p.to_pixel(image_width, image_height))
            .collect()
    }
}

impl<TSpace> FromIterator<Point<TSpace>> for Polygon<TSpace> {
    fn from_iter<I: IntoIterator<Item = Point<TSpace>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
