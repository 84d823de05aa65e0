//! Center-crop and border-aware scaling of the source image.

use cameo_engine::coords::{Vec2, Viewport};
use cameo_engine::image::{ImageId, SourceImage};
use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Square region taken from the middle of the source image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// Largest centered square inside a `width × height` image.
///
/// Odd leftovers favour the top/left edge.
pub fn square_crop(width: u32, height: u32) -> CropRegion {
    let side = width.min(height);
    CropRegion { x: (width - side) / 2, y: (height - side) / 2, side }
}

/// Size left for the image once `border` pixels are reserved on every side.
pub fn fit_size(viewport: Viewport, border: u32) -> Option<(u32, u32)> {
    viewport.inset(border).map(|inner| (inner.width, inner.height))
}

/// Source image cropped to a square and resampled to the target size.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pub image: SourceImage,
    pub crop: CropRegion,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl NormalizedImage {
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }
}

/// Crops `source` to its centered square and scales it to exactly
/// `target_w × target_h` with triangle filtering.
///
/// Filtering runs on premultiplied pixels, so fully transparent texels
/// contribute no color. The scale may differ per axis. Returns `None` for an empty source or
/// target.
pub fn normalize(source: &SourceImage, target_w: u32, target_h: u32) -> Option<NormalizedImage> {
    if source.is_empty() || target_w == 0 || target_h == 0 {
        return None;
    }

    let crop = square_crop(source.width(), source.height());
    let square = imageops::crop_imm(source.pixels(), crop.x, crop.y, crop.side, crop.side).to_image();
    let scaled = if crop.side == target_w && crop.side == target_h {
        square
    } else {
        let scaled = imageops::resize(&premultiplied(&square), target_w, target_h, FilterType::Triangle);
        demultiplied(&scaled)
    };

    Some(NormalizedImage {
        image: SourceImage::from_rgba(scaled),
        crop,
        scale_x: target_w as f32 / crop.side as f32,
        scale_y: target_h as f32 / crop.side as f32,
    })
}

fn premultiplied(src: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn demultiplied(src: &Rgba32FImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let [r, g, b, a] = src.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), to_u8(a)])
    })
}

// ── NormalizeCache ────────────────────────────────────────────────────────

/// Remembers the last normalization so unchanged frames skip the resample.
///
/// Keyed on source identity and target size.
#[derive(Debug, Default)]
pub struct NormalizeCache {
    entry: Option<(ImageId, u32, u32, NormalizedImage)>,
    misses: u64,
}

impl NormalizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_normalize(
        &mut self,
        source: &SourceImage,
        target_w: u32,
        target_h: u32,
    ) -> Option<&NormalizedImage> {
        let hit = matches!(
            &self.entry,
            Some((id, w, h, _)) if *id == source.id() && *w == target_w && *h == target_h
        );
        if !hit {
            self.misses += 1;
            log::debug!(
                "normalizing {}x{} source to {target_w}x{target_h}",
                source.width(),
                source.height()
            );
            let normalized = normalize(source, target_w, target_h)?;
            self.entry = Some((source.id(), target_w, target_h, normalized));
        }
        self.entry.as_ref().map(|(_, _, _, n)| n)
    }

    /// Number of normalizations performed.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── square_crop ───────────────────────────────────────────────────────

    #[test]
    fn landscape_crops_horizontally() {
        assert_eq!(square_crop(300, 150), CropRegion { x: 75, y: 0, side: 150 });
    }

    #[test]
    fn portrait_crops_vertically() {
        assert_eq!(square_crop(120, 200), CropRegion { x: 0, y: 40, side: 120 });
    }

    #[test]
    fn crop_is_centered() {
        for (w, h) in [(300, 150), (151, 40), (7, 64), (1, 2)] {
            let c = square_crop(w, h);
            assert_eq!(c.side, w.min(h));
            // Margins on either side differ by at most the odd pixel.
            let (right, bottom) = (w - c.x - c.side, h - c.y - c.side);
            assert!(right - c.x <= 1 && bottom - c.y <= 1, "{w}x{h}: {c:?}");
        }
    }

    #[test]
    fn square_is_untouched() {
        assert_eq!(square_crop(64, 64), CropRegion { x: 0, y: 0, side: 64 });
    }

    // ── fit_size ──────────────────────────────────────────────────────────

    #[test]
    fn fit_size_subtracts_both_sides() {
        assert_eq!(fit_size(Viewport::new(200, 200), 10), Some((180, 180)));
        assert_eq!(fit_size(Viewport::new(300, 120), 0), Some((300, 120)));
        assert_eq!(fit_size(Viewport::new(20, 20), 10), None);
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_reports_crop_and_scale() {
        let src = SourceImage::filled(300, 150, [0, 0, 255, 255]);
        let n = normalize(&src, 180, 90).unwrap();
        assert_eq!(n.crop, CropRegion { x: 75, y: 0, side: 150 });
        assert_eq!((n.image.width(), n.image.height()), (180, 90));
        assert_eq!(n.scale_x, 1.2);
        assert_eq!(n.scale_y, 0.6);
    }

    #[test]
    fn normalize_keeps_center_content() {
        // Left and right quarters green, middle half red.
        let pixels = RgbaImage::from_fn(300, 150, |x, _| {
            if (75..225).contains(&x) { Rgba([255, 0, 0, 255]) } else { Rgba([0, 255, 0, 255]) }
        });
        let n = normalize(&SourceImage::from_rgba(pixels), 150, 150).unwrap();
        assert!(n.image.pixels().pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn transparent_texels_do_not_tint_edges() {
        // Invisible red on the left, opaque green on the right.
        let pixels = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 { Rgba([255, 0, 0, 0]) } else { Rgba([0, 255, 0, 255]) }
        });
        let n = normalize(&SourceImage::from_rgba(pixels), 9, 9).unwrap();

        let edge = n.image.pixels().get_pixel(4, 4).0;
        assert!(edge[3] > 0 && edge[3] < 255, "edge should be translucent: {edge:?}");
        assert_eq!(edge[0], 0, "red leaked into {edge:?}");
        assert_eq!(edge[2], 0);
        assert!(edge[1] >= 250, "{edge:?}");

        assert_eq!(n.image.pixels().get_pixel(0, 4).0, [0, 0, 0, 0]);
        assert_eq!(n.image.pixels().get_pixel(8, 4).0, [0, 255, 0, 255]);
    }

    #[test]
    fn normalize_rejects_empty() {
        let src = SourceImage::filled(4, 4, [0, 0, 0, 255]);
        assert!(normalize(&src, 0, 4).is_none());
        assert!(normalize(&SourceImage::filled(0, 4, [0; 4]), 4, 4).is_none());
    }

    // ── NormalizeCache ────────────────────────────────────────────────────

    #[test]
    fn cache_reuses_until_inputs_change() {
        let a = SourceImage::filled(10, 20, [1, 2, 3, 255]);
        let b = SourceImage::filled(10, 20, [1, 2, 3, 255]);
        let mut cache = NormalizeCache::new();

        cache.get_or_normalize(&a, 8, 8).unwrap();
        cache.get_or_normalize(&a.clone(), 8, 8).unwrap();
        assert_eq!(cache.misses(), 1);

        cache.get_or_normalize(&a, 6, 8).unwrap();
        assert_eq!(cache.misses(), 2);

        cache.get_or_normalize(&b, 6, 8).unwrap();
        assert_eq!(cache.misses(), 3);

        cache.clear();
        cache.get_or_normalize(&b, 6, 8).unwrap();
        assert_eq!(cache.misses(), 4);
    }
}
