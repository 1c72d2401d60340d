//! Geometry types shared by every stage of the review pipeline.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Marker types keep normalized detector geometry and
//!    pixel geometry apart at compile time. The only bridge is
//!    [`Polygon::to_pixel`], applied once per polygon against the canvas size.
//!
//! 2. **Permissive Construction**: A polygon may be empty, because detector
//!    output may be. Operations that need vertices report [`EmptyPolygon`]
//!    rather than panic.
//!
//! # Example
//!
//! ```
//! use reviewmark::geom::{Normalized, Polygon};
//!
//! let word: Polygon<Normalized> =
//!     Polygon::from_xy(&[(0.2, 0.2), (0.4, 0.2), (0.4, 0.4), (0.2, 0.4)]);
//! let pixels = word.to_pixel(100.0, 100.0);
//! assert_eq!(pixels.vertices()[1].x, 40.0);
//! ```

mod bbox;
mod point;
mod polygon;
mod space;

pub use bbox::BBoxXYXY;
pub use point::Point;
pub use polygon::{EmptyPolygon, Polygon};
pub use space::{Normalized, Pixel};
