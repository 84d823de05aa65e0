use super::{Rect, Vec2};

/// Drawable area of a widget in whole device pixels, after padding.
///
/// Supplied fresh on every render call; never cached across sizes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Truncates a laid-out size to whole pixels. Negative or non-finite
    /// components become zero.
    #[inline]
    pub fn from_size(size: Vec2) -> Self {
        let px = |v: f32| if v.is_finite() && v > 0.0 { v.floor() as u32 } else { 0 };
        Self::new(px(size.x), px(size.y))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn shorter_side(self) -> u32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.size() / 2.0
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::from_size(self.size())
    }

    /// Size left after reserving `border` pixels on every side.
    ///
    /// Returns `None` when nothing remains on either axis.
    #[inline]
    pub fn inset(self, border: u32) -> Option<Viewport> {
        let width = self.width.checked_sub(border.saturating_mul(2))?;
        let height = self.height.checked_sub(border.saturating_mul(2))?;
        let inner = Viewport::new(width, height);
        (!inner.is_empty()).then_some(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_truncates() {
        assert_eq!(Viewport::from_size(Vec2::new(199.9, 100.2)), Viewport::new(199, 100));
    }

    #[test]
    fn from_size_rejects_negative_and_nan() {
        assert_eq!(Viewport::from_size(Vec2::new(-4.0, f32::NAN)), Viewport::new(0, 0));
    }

    #[test]
    fn shorter_side_and_center() {
        let vp = Viewport::new(300, 200);
        assert_eq!(vp.shorter_side(), 200);
        assert_eq!(vp.center(), Vec2::new(150.0, 100.0));
    }

    #[test]
    fn inset_reserves_both_sides() {
        assert_eq!(Viewport::new(200, 200).inset(10), Some(Viewport::new(180, 180)));
    }

    #[test]
    fn inset_consuming_everything_is_none() {
        assert_eq!(Viewport::new(20, 40).inset(10), None);
        assert_eq!(Viewport::new(20, 40).inset(11), None);
    }

    #[test]
    fn empty_when_any_axis_zero() {
        assert!(Viewport::new(0, 10).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
