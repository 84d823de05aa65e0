use cameo_engine::coords::{Rect, Vec2};
use cameo_engine::paint::Paint;
use cameo_engine::scene::{Border, DrawList};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a canvas-style API: a current
/// translation plus a save/restore stack. Geometry handed to the `fill_*`
/// methods is in local coordinates and recorded in absolute pixels.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    origin: Vec2,
    saved: Vec<Vec2>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, origin: Vec2::zero(), saved: Vec::new() }
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Current translation relative to the draw list's coordinate space.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Moves the local origin by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin + Vec2::new(dx, dy);
    }

    /// Pushes the current translation.
    #[inline]
    pub fn save(&mut self) {
        self.saved.push(self.origin);
    }

    /// Pops the translation pushed by the matching [`save`](Self::save).
    ///
    /// An unbalanced `restore` resets to the identity.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(origin) => self.origin = origin,
            None => {
                log::warn!("Painter::restore without matching save");
                self.origin = Vec2::zero();
            }
        }
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Fills a circle, optionally stroking its outline with `border`.
    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let paint = paint.into().translated(self.origin);
        self.draw_list.push_circle(center + self.origin, radius, paint, border);
    }

    /// Fills a rounded rectangle, optionally stroking its outline with `border`.
    ///
    /// A `radius` of 0 gives sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let paint = paint.into().translated(self.origin);
        self.draw_list.push_rounded_rect(rect.translated(self.origin), radius, paint, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cameo_engine::image::SourceImage;
    use cameo_engine::paint::{Color, ImagePaint};
    use cameo_engine::scene::DrawCmd;

    #[test]
    fn translate_accumulates() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list);
        p.translate(3.0, 4.0);
        p.translate(1.0, -2.0);
        assert_eq!(p.origin(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn save_restore_nests() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list);
        p.save();
        p.translate(10.0, 10.0);
        p.save();
        p.translate(5.0, 0.0);
        assert_eq!(p.origin(), Vec2::new(15.0, 10.0));
        p.restore();
        assert_eq!(p.origin(), Vec2::new(10.0, 10.0));
        p.restore();
        assert_eq!(p.origin(), Vec2::zero());
    }

    #[test]
    fn unbalanced_restore_resets() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list);
        p.translate(7.0, 7.0);
        p.restore();
        assert_eq!(p.origin(), Vec2::zero());
    }

    #[test]
    fn geometry_is_recorded_in_absolute_pixels() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.translate(10.0, 20.0);
            p.fill_circle(Vec2::new(5.0, 5.0), 4.0, Color::white(), None);
            p.fill_rounded_rect(Rect::new(0.0, 0.0, 8.0, 8.0), 2.0, Color::from_argb(0xFF000000), None);
        }
        match &list.items()[0] {
            DrawCmd::Circle(c) => assert_eq!(c.center, Vec2::new(15.0, 25.0)),
            other => panic!("expected circle, got {other:?}"),
        }
        match &list.items()[1] {
            DrawCmd::RoundedRect(r) => assert_eq!(r.rect, Rect::new(10.0, 20.0, 8.0, 8.0)),
            other => panic!("expected rounded rect, got {other:?}"),
        }
    }

    #[test]
    fn image_pattern_moves_with_the_canvas() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list);
            p.translate(6.0, 6.0);
            let img = SourceImage::filled(4, 4, [255, 0, 0, 255]);
            p.fill_circle(Vec2::new(2.0, 2.0), 2.0, ImagePaint::clamped(img, Vec2::zero()), None);
        }
        match list.items()[0].paint() {
            Paint::Image(img) => assert_eq!(img.origin, Vec2::new(6.0, 6.0)),
            other => panic!("expected image paint, got {other:?}"),
        }
    }
}
