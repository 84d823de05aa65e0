//! Paint model shared between UI and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, image pattern)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod image;

pub use color::Color;
pub use self::image::ImagePaint;

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Image(ImagePaint),
}

impl Paint {
    /// Returns the paint as seen after moving the canvas by `offset`.
    ///
    /// Solid paints are position independent; image patterns move with the canvas.
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        match self {
            Paint::Solid(c) => Paint::Solid(c),
            Paint::Image(img) => Paint::Image(ImagePaint { origin: img.origin + offset, ..img }),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<ImagePaint> for Paint {
    #[inline]
    fn from(image: ImagePaint) -> Self {
        Paint::Image(image)
    }
}
