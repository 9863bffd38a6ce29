//! Widget capability traits.
//!
//! Matchers are capability-bounded: before evaluating a behavioral condition
//! they restrict themselves to candidates that actually carry the required
//! interface. Discovery is an explicit runtime check through the accessors on
//! [`View`] rather than downcasting to concrete widget types, so any widget
//! implementation from the host toolkit can opt in by overriding the relevant
//! accessor. Matchers only ever read from the target; nothing here takes
//! `&mut self`.

use image::RgbaImage;
use thiserror::Error;

/// Base trait for candidate widgets handed to a matcher.
///
/// The default accessors return `None`, meaning "capability absent". A widget
/// that displays an image overrides [`View::as_image_view`]; a toggleable
/// text widget overrides [`View::as_checkable_text`].
pub trait View {
    /// The image-displaying capability of this widget, if it has one.
    fn as_image_view(&self) -> Option<&dyn ImageView> {
        None
    }

    /// The checkable-text capability of this widget, if it has one.
    fn as_checkable_text(&self) -> Option<&dyn CheckableTextView> {
        None
    }
}

/// A widget that can display a [`Drawable`].
pub trait ImageView: View {
    /// The currently displayed drawable, or `None` if nothing is set.
    fn drawable(&self) -> Option<&dyn Drawable>;

    /// Current width of the view's pixel area.
    fn pixel_width(&self) -> u32;

    /// Current height of the view's pixel area.
    fn pixel_height(&self) -> u32;
}

/// A text widget with a boolean checked state.
pub trait CheckableTextView: View {
    fn is_checked(&self) -> bool;
}

/// Something that can be rendered to a concrete pixel buffer.
pub trait Drawable {
    /// Produce the pixel buffer this drawable renders as at the given size.
    fn rasterize(&self, width: u32, height: u32) -> Result<RgbaImage, RasterizeError>;
}

/// Errors signalled by [`Drawable::rasterize`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RasterizeError {
    /// The requested raster target has a zero dimension.
    #[error("zero-sized raster target: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    /// The drawable's own rendering backend failed.
    #[error("drawable rendering failed: {0}")]
    Render(String),
}
