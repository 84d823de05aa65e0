//! Conversions between straight-alpha `RgbaImage` and premultiplied `Pixmap`.

use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

/// Copies a straight-alpha buffer into a premultiplied pixmap.
///
/// Returns `None` for zero-sized images, which tiny-skia cannot represent.
pub fn rgba_to_pixmap(src: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(src.width(), src.height())?;
    for (dst, px) in pixmap.pixels_mut().iter_mut().zip(src.pixels()) {
        let [r, g, b, a] = px.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Copies a premultiplied pixmap into a straight-alpha buffer.
pub fn pixmap_to_rgba(src: &Pixmap) -> RgbaImage {
    let width = src.width();
    let pixels = src.pixels();
    RgbaImage::from_fn(width, src.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}
