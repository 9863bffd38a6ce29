//! Fake widgets and drawables for tests, demos, and doctests.
//!
//! These fixtures stand in for a real toolkit's widget hierarchy: just enough
//! state to exercise the capability checks and the pixel/checked predicates.

use image::RgbaImage;

use crate::color::Color;
use crate::view::{CheckableTextView, Drawable, ImageView, RasterizeError, View};

/// A drawable that fills the whole raster target with one color.
#[derive(Debug, Clone, Copy)]
pub struct SolidColorDrawable {
    color: Color,
}

impl SolidColorDrawable {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Drawable for SolidColorDrawable {
    fn rasterize(&self, width: u32, height: u32) -> Result<RgbaImage, RasterizeError> {
        if width == 0 || height == 0 {
            return Err(RasterizeError::ZeroSize { width, height });
        }
        Ok(RgbaImage::from_pixel(width, height, self.color.to_rgba()))
    }
}

/// A drawable whose rendering backend always fails with a fixed message.
#[derive(Debug, Clone)]
pub struct FailingDrawable {
    message: String,
}

impl FailingDrawable {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Drawable for FailingDrawable {
    fn rasterize(&self, _width: u32, _height: u32) -> Result<RgbaImage, RasterizeError> {
        Err(RasterizeError::Render(self.message.clone()))
    }
}

/// An image-displaying widget with an optional drawable and fixed dimensions.
pub struct FakeImageView {
    drawable: Option<Box<dyn Drawable>>,
    width: u32,
    height: u32,
}

impl FakeImageView {
    pub fn new(drawable: impl Drawable + 'static, width: u32, height: u32) -> Self {
        Self {
            drawable: Some(Box::new(drawable)),
            width,
            height,
        }
    }

    /// An image view with no drawable set.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            drawable: None,
            width,
            height,
        }
    }
}

impl View for FakeImageView {
    fn as_image_view(&self) -> Option<&dyn ImageView> {
        Some(self)
    }
}

impl ImageView for FakeImageView {
    fn drawable(&self) -> Option<&dyn Drawable> {
        self.drawable.as_deref()
    }

    fn pixel_width(&self) -> u32 {
        self.width
    }

    fn pixel_height(&self) -> u32 {
        self.height
    }
}

/// A toggleable text widget exposing only a checked flag.
pub struct FakeCheckedTextView {
    checked: bool,
}

impl FakeCheckedTextView {
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }
}

impl View for FakeCheckedTextView {
    fn as_checkable_text(&self) -> Option<&dyn CheckableTextView> {
        Some(self)
    }
}

impl CheckableTextView for FakeCheckedTextView {
    fn is_checked(&self) -> bool {
        self.checked
    }
}

/// A widget with no matcher-relevant capabilities at all.
pub struct FakeView;

impl View for FakeView {}
