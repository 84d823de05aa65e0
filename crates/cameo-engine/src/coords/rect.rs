use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect anchored at the origin.
    #[inline]
    pub const fn from_size(size: Vec2) -> Self {
        Self { origin: Vec2::zero(), size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn translated(self, offset: Vec2) -> Self {
        Self { origin: self.origin + offset, size: self.size }
    }

    /// Moves every edge inward by `amount`. Size never goes below zero.
    #[inline]
    #[must_use]
    pub fn inset(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x + amount,
            self.origin.y + amount,
            (self.size.x - 2.0 * amount).max(0.0),
            (self.size.y - 2.0 * amount).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── center / max ──────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(1.0, 2.0, 3.0, 4.0).max(), Vec2::new(4.0, 6.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_each_edge() {
        let inner = r(0.0, 0.0, 200.0, 100.0).inset(5.0);
        assert_eq!(inner, r(5.0, 5.0, 190.0, 90.0));
    }

    #[test]
    fn inset_half_pixel() {
        // Border rects are inset by half the border width, which may be fractional.
        let inner = r(0.0, 0.0, 100.0, 100.0).inset(2.5);
        assert_eq!(inner, r(2.5, 2.5, 95.0, 95.0));
    }

    #[test]
    fn inset_clamps_size_to_zero() {
        let inner = r(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(inner.size, Vec2::zero());
        assert!(inner.is_empty());
    }

    // ── translated ────────────────────────────────────────────────────────

    #[test]
    fn translated_keeps_size() {
        let moved = r(0.0, 0.0, 8.0, 6.0).translated(Vec2::new(10.0, 10.0));
        assert_eq!(moved, r(10.0, 10.0, 8.0, 6.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
