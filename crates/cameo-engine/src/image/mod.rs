//! Decoded source rasters.
//!
//! A [`SourceImage`] is an immutable straight-alpha RGBA buffer with a
//! process-unique identity. Clones share both the pixels and the identity, so
//! downstream caches can key on [`ImageId`] instead of hashing pixels.

mod convert;
mod error;
mod svg;

pub use convert::{pixmap_to_rgba, rgba_to_pixmap};
pub use error::ImageError;

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a decoded image. Equal ids imply equal pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared, immutable RGBA raster.
#[derive(Clone)]
pub struct SourceImage {
    id: ImageId,
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Wraps an already decoded buffer and assigns it a fresh identity.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { id: ImageId::next(), pixels: Arc::new(pixels) }
    }

    /// Single-color image, mostly useful for placeholders and tests.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    /// Reads and decodes an image file. The format is detected from contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(image::ImageError::IoError)?;
        let image = Self::from_encoded(&bytes)?;
        log::debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
        Ok(image)
    }

    /// Decodes an in-memory encoded raster (PNG, JPEG, ...).
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, ImageError> {
        Ok(Self::from_rgba(image::load_from_memory(bytes)?.to_rgba8()))
    }

    /// Rasterizes an SVG document at its intrinsic size.
    pub fn from_svg_data(data: &[u8]) -> Result<Self, ImageError> {
        svg::rasterize(data).map(Self::from_rgba)
    }

    #[inline]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for SourceImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("id", &self.id)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a = SourceImage::filled(4, 2, [255, 0, 0, 255]);
        let b = a.clone();
        assert_eq!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn separate_decodes_get_distinct_ids() {
        let a = SourceImage::filled(1, 1, [0, 0, 0, 255]);
        let b = SourceImage::filled(1, 1, [0, 0, 0, 255]);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn dimensions_follow_buffer() {
        let img = SourceImage::filled(300, 150, [1, 2, 3, 4]);
        assert_eq!((img.width(), img.height()), (300, 150));
        assert!(!img.is_empty());
        assert!(SourceImage::filled(0, 10, [0; 4]).is_empty());
    }

    #[test]
    fn encoded_png_round_trip() {
        let mut bytes = Vec::new();
        let src = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        src.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let img = SourceImage::from_encoded(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.pixels().get_pixel(2, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = SourceImage::from_encoded(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = SourceImage::open("/nonexistent/cameo/avatar.png").unwrap_err();
        assert!(matches!(err, ImageError::Decode(image::ImageError::IoError(_))));
    }
}
