use cameo_engine::coords::{Rect, Vec2, Viewport};
use cameo_engine::image::SourceImage;
use cameo_engine::paint::ImagePaint;
use cameo_engine::scene::Border;

use crate::painter::Painter;

use super::config::RenderConfig;
use super::normalize::{NormalizeCache, fit_size};

/// Draws an image masked to a circle or rounded rect with an optional
/// border ring behind it.
///
/// The border shape is painted first in the border color, then the canvas
/// moves by the border width and the image shape is filled with the
/// normalized image as a clamped pattern.
#[derive(Debug)]
pub struct RoundedImageRenderer {
    config: RenderConfig,
    cache: NormalizeCache,
    warned_clamp: bool,
}

impl RoundedImageRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config, cache: NormalizeCache::new(), warned_clamp: false }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &NormalizeCache {
        &self.cache
    }

    /// Records the draw commands for one frame.
    ///
    /// Nothing is drawn without an image or for an empty viewport.
    pub fn render(&mut self, painter: &mut Painter, image: Option<&SourceImage>, viewport: Viewport) {
        let Some(image) = image else {
            log::trace!("rounded image: no source, skipping");
            return;
        };
        if viewport.is_empty() {
            log::trace!("rounded image: empty viewport {viewport:?}, skipping");
            return;
        }

        let border = self.border_for(viewport);
        let normalized = fit_size(viewport, border)
            .and_then(|(w, h)| self.cache.get_or_normalize(image, w, h))
            .cloned();

        let b = border as f32;
        let config = self.config;
        let ring = (border > 0).then(|| Border::new(b, config.color()));

        if config.is_circle() {
            let radius = viewport.shorter_side() as f32 / 2.0 - b / 2.0;
            painter.fill_circle(viewport.center(), radius, config.color(), ring);
        } else {
            let rect = viewport.rect().inset(b / 2.0);
            painter.fill_rounded_rect(rect, config.radius(), config.color(), ring);
        }

        let Some(normalized) = normalized else {
            log::trace!("rounded image: border fills {viewport:?}, image skipped");
            return;
        };

        let size = normalized.size();
        let pattern = ImagePaint::clamped(normalized.image, Vec2::zero());

        painter.save();
        painter.translate(b, b);
        if config.is_circle() {
            painter.fill_circle(size / 2.0, size.min_element() / 2.0, pattern, None);
        } else {
            painter.fill_rounded_rect(Rect::from_size(size), config.image_corner_radius(border), pattern, None);
        }
        painter.restore();
    }

    /// Border width limited to half the shorter viewport side.
    fn border_for(&mut self, viewport: Viewport) -> u32 {
        let max = viewport.shorter_side() / 2;
        let requested = self.config.width();
        if requested <= max {
            return requested;
        }
        if !self.warned_clamp {
            log::warn!("border width {requested}px exceeds {viewport:?}; clamped to {max}px");
            self.warned_clamp = true;
        }
        max
    }
}
