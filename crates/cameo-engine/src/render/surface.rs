use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::Pixmap;

use crate::coords::Viewport;
use crate::image::pixmap_to_rgba;
use crate::paint::Color;

use super::shapes::common::skia_color;

/// Pixel drawing surface with known dimensions.
///
/// Backed by a premultiplied RGBA pixmap, initially fully transparent.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("cannot allocate a {width}x{height} surface"))?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width(), self.height())
    }

    /// Overwrites every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(skia_color(color));
    }

    /// Straight-alpha `[r, g, b, a]` at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Raw premultiplied RGBA bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        pixmap_to_rgba(&self.pixmap)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}x{} surface to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    #[inline]
    pub fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
