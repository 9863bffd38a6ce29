//! Uniform-color pixel sampling.
//!
//! [`check_all_pixels_of_color`] is the routine behind the drawable color
//! matcher: rasterize a drawable at a target size, then compare every pixel
//! against an expected color with alpha significant. Failures come back as a
//! typed [`PixelError`] whose `Display` text is the human-readable diagnostic
//! the matcher stores as its failure reason.

use thiserror::Error;

use crate::color::Color;
use crate::view::{Drawable, RasterizeError};

/// Errors produced while sampling a drawable's pixels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PixelError {
    /// Rasterization of the drawable failed before any pixel was compared.
    #[error(transparent)]
    Rasterize(#[from] RasterizeError),

    /// The comparison area is empty, so a uniform-color claim is vacuous.
    #[error("empty comparison area: {width}x{height}")]
    EmptyArea { width: u32, height: u32 },

    /// The drawable rasterized to a buffer of a different size than requested.
    #[error(
        "rasterized size mismatch: requested {requested_width}x{requested_height}, \
         got {actual_width}x{actual_height}"
    )]
    SizeMismatch {
        requested_width: u32,
        requested_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// A pixel differs from the expected color.
    #[error("expected all pixels of color {expected}, found {actual} at ({x}, {y})")]
    ColorMismatch {
        expected: Color,
        actual: Color,
        x: u32,
        y: u32,
    },
}

/// Rasterize `drawable` at `width`x`height` and verify that every pixel
/// equals `expected`, alpha included.
///
/// Scans row-major and reports the first mismatching pixel, so the diagnostic
/// is stable for a given buffer.
pub fn check_all_pixels_of_color(
    drawable: &dyn Drawable,
    width: u32,
    height: u32,
    expected: Color,
) -> Result<(), PixelError> {
    if width == 0 || height == 0 {
        return Err(PixelError::EmptyArea { width, height });
    }

    let buffer = drawable.rasterize(width, height)?;
    let (actual_width, actual_height) = buffer.dimensions();
    if (actual_width, actual_height) != (width, height) {
        return Err(PixelError::SizeMismatch {
            requested_width: width,
            requested_height: height,
            actual_width,
            actual_height,
        });
    }

    for (x, y, pixel) in buffer.enumerate_pixels() {
        let actual = Color::from_rgba(*pixel);
        if actual != expected {
            return Err(PixelError::ColorMismatch {
                expected,
                actual,
                x,
                y,
            });
        }
    }

    Ok(())
}
