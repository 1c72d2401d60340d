//! The raster surface review outlines are drawn on.
//!
//! A [`Canvas`] is created from one source image, mutated by one render
//! call, and consumed by [`Canvas::persist`]. Dropping it without
//! persisting discards the drawing.

use std::fs::{self, Permissions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, Canvas as Surface};

use super::style::StrokeStyle;
use crate::error::ReviewError;
use crate::geom::{Pixel, Polygon};

/// An in-memory copy of the source image.
///
/// Images with an alpha channel are kept as RGBA, everything else as RGB.
pub struct Canvas {
    raster: Raster,
    permissions: Option<Permissions>,
}

enum Raster {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Canvas {
    /// Decodes the image at `path` into a new canvas.
    ///
    /// The decoder is picked from the file content, not its extension. The
    /// source's permissions are remembered and given to the persisted copy.
    ///
    /// # Errors
    /// Returns [`ReviewError::ImageLoad`] if the file is missing, unreadable
    /// or not a decodable image.
    pub fn load(path: &Path) -> Result<Self, ReviewError> {
        let load_err = |source: ImageError| ReviewError::ImageLoad {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| load_err(ImageError::IoError(e)))?
            .decode()
            .map_err(load_err)?;
        let permissions = fs::metadata(path)
            .map_err(|e| load_err(ImageError::IoError(e)))?
            .permissions();

        let mut canvas = Self::from_image(image);
        canvas.permissions = Some(permissions);
        Ok(canvas)
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let raster = if image.color().has_alpha() {
            Raster::Rgba(image.into_rgba8())
        } else {
            Raster::Rgb(image.into_rgb8())
        };
        Self {
            raster,
            permissions: None,
        }
    }

    pub fn width(&self) -> u32 {
        match &self.raster {
            Raster::Rgb(img) => img.width(),
            Raster::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.raster {
            Raster::Rgb(img) => img.height(),
            Raster::Rgba(img) => img.height(),
        }
    }

    /// Strokes the closed outline of `polygon`, clipped to the canvas.
    pub fn stroke_polygon(&mut self, polygon: &Polygon<Pixel>, style: &StrokeStyle) {
        let [r, g, b] = style.color;
        match &mut self.raster {
            Raster::Rgb(img) => stroke_outline(img, polygon, style.width, Rgb([r, g, b])),
            Raster::Rgba(img) => stroke_outline(img, polygon, style.width, Rgba([r, g, b, 255])),
        }
    }

    pub fn into_image(self) -> DynamicImage {
        match self.raster {
            Raster::Rgb(img) => DynamicImage::ImageRgb8(img),
            Raster::Rgba(img) => DynamicImage::ImageRgba8(img),
        }
    }

    /// Encodes the canvas to `path`, choosing the format from its extension.
    ///
    /// The image is written to a temporary file next to `path` and renamed
    /// into place, so `path` either receives the complete image or is left
    /// untouched. The copy gets the source image's permissions, or `0644`
    /// on Unix for canvases built in memory.
    ///
    /// # Errors
    /// Returns [`ReviewError::ImageWrite`] if the format is unknown or the
    /// file cannot be written.
    pub fn persist(mut self, path: &Path) -> Result<(), ReviewError> {
        let write_err = |source: ImageError| ReviewError::ImageWrite {
            path: path.to_path_buf(),
            source,
        };

        let format = ImageFormat::from_path(path).map_err(write_err)?;
        let permissions = self.permissions.take().or_else(default_permissions);
        let image = encodable(self.into_image(), format);

        let dir = parent_dir(path);
        let mut tmp = tempfile::Builder::new()
            .prefix(".reviewmark-")
            .tempfile_in(&dir)
            .map_err(|e| write_err(ImageError::IoError(e)))?;

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            image.write_to(&mut writer, format).map_err(write_err)?;
            writer
                .flush()
                .map_err(|e| write_err(ImageError::IoError(e)))?;
        }

        if let Some(permissions) = permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|e| write_err(ImageError::IoError(e)))?;
        }

        tmp.persist(path)
            .map_err(|e| write_err(ImageError::IoError(e.error)))?;
        Ok(())
    }
}

/// Draws every edge of `polygon` as `width` parallel one-pixel lines
/// offset along the edge normal, with a disc on each vertex to fill the
/// joins.
fn stroke_outline<C>(surface: &mut C, polygon: &Polygon<Pixel>, width: u32, color: C::Pixel)
where
    C: Surface,
{
    if width == 0 {
        return;
    }
    let half = (width / 2) as f64;
    let (w, h) = surface.dimensions();
    let pad = width as f64 + 1.0;
    let clip = (-pad, -pad, w as f64 + pad, h as f64 + pad);

    for (a, b) in polygon.edges() {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len = dx.hypot(dy);
        let (nx, ny) = if len == 0.0 {
            (1.0, 0.0)
        } else {
            (-dy / len, dx / len)
        };

        for k in 0..width {
            let offset = k as f64 - half;
            let (ox, oy) = (nx * offset, ny * offset);
            let (start, end) = ((a.x + ox, a.y + oy), (b.x + ox, b.y + oy));
            let Some((start, end)) = clip_segment(start, end, clip) else {
                continue;
            };
            draw_line_segment_mut(
                surface,
                (start.0 as f32, start.1 as f32),
                (end.0 as f32, end.1 as f32),
                color,
            );
        }
    }

    if width > 1 {
        let radius = (width / 2) as i32;
        let (min_x, min_y, max_x, max_y) = clip;
        for v in polygon.vertices() {
            if !(min_x..=max_x).contains(&v.x) || !(min_y..=max_y).contains(&v.y) {
                continue;
            }
            let center = (v.x.round() as i32, v.y.round() as i32);
            draw_filled_circle_mut(surface, center, radius, color);
        }
    }
}

/// Liang-Barsky clip of the segment `a`-`b` to the rectangle
/// `(min_x, min_y, max_x, max_y)`. `None` if nothing of it is inside.
///
/// The line rasterizer walks every point of a segment, including those off
/// the canvas, so segments are cut down to the canvas first.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    if ![a.0, a.1, b.0, b.1].iter().all(|c| c.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, a.0 - min_x),
        (dx, max_x - a.0),
        (-dy, a.1 - min_y),
        (dy, max_y - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some(((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

fn default_permissions() -> Option<Permissions> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Converts to a colour layout `format` can encode.
fn encodable(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    match (format, image) {
        (ImageFormat::Jpeg, DynamicImage::ImageRgba8(img)) => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img).into_rgb8())
        }
        (_, image) => image,
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
