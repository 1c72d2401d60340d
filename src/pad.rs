//! Outward polygon padding.
//!
//! Every vertex is pushed directly away from the polygon's vertex centroid
//! by the same absolute distance. Near and far vertices both move by
//! `margin` pixels; this is not a uniform scale.

use crate::geom::{EmptyPolygon, Pixel, Point, Polygon};

/// Pads `polygon` outward by `margin` pixels.
///
/// The result has the same vertex count and order as the input. A vertex
/// that sits exactly on the centroid has no outward direction and is
/// returned unchanged.
///
/// # Errors
/// Returns [`EmptyPolygon`] if the polygon has no vertices.
pub fn pad(polygon: &Polygon<Pixel>, margin: f64) -> Result<Polygon<Pixel>, EmptyPolygon> {
    let centroid = polygon.centroid()?;

    Ok(polygon
        .vertices()
        .iter()
        .map(|v| push_out(v, &centroid, margin))
        .collect())
}

fn push_out(vertex: &Point<Pixel>, centroid: &Point<Pixel>, margin: f64) -> Point<Pixel> {
    let dx = vertex.x - centroid.x;
    let dy = vertex.y - centroid.y;
    let dist = dx.hypot(dy);

    if dist == 0.0 {
        return *vertex;
    }

    let factor = (dist + margin) / dist;
    Point::new(centroid.x + dx * factor, centroid.y + dy * factor)
}
