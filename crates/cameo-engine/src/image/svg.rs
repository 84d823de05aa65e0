use image::RgbaImage;
use resvg::usvg;
use tiny_skia::{Pixmap, Transform};

use super::{ImageError, pixmap_to_rgba};

/// Renders an SVG document into a raster at its intrinsic size (rounded up).
pub(super) fn rasterize(data: &[u8]) -> Result<RgbaImage, ImageError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| ImageError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(ImageError::Raster { width, height })?;

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    log::debug!("rasterized svg at {width}x{height}");

    Ok(pixmap_to_rgba(&pixmap))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect x="0" y="0" width="20" height="10" fill="#00ff00"/>
    </svg>"##;

    #[test]
    fn uses_intrinsic_size() {
        let img = rasterize(SQUARE).unwrap();
        assert_eq!((img.width(), img.height()), (20, 10));
    }

    #[test]
    fn fills_with_document_color() {
        let img = rasterize(SQUARE).unwrap();
        assert_eq!(img.get_pixel(10, 5).0, [0, 255, 0, 255]);
    }

    #[test]
    fn rejects_non_svg() {
        assert!(matches!(rasterize(b"<html></html>"), Err(ImageError::Svg(_))));
    }
}
