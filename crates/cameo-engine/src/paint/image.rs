use crate::coords::Vec2;
use crate::image::SourceImage;

/// Image used as a fill pattern.
///
/// The image is sampled 1:1 in device pixels with its top-left pixel at
/// `origin`. Outside its bounds the pattern clamps to the nearest edge
/// pixel. Whatever shape is filled with this paint acts as the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePaint {
    pub image: SourceImage,
    pub origin: Vec2,
}

impl ImagePaint {
    /// Clamped pattern with its top-left at `origin`.
    #[inline]
    pub fn clamped(image: SourceImage, origin: Vec2) -> Self {
        Self { image, origin }
    }
}
