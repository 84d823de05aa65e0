use cameo_engine::coords::{Rect, Vec2};

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// The size the parent offers on each axis: `max` where bounded,
    /// otherwise `min`.
    #[inline]
    pub fn offered(self) -> Vec2 {
        Vec2::new(
            if self.max.x.is_finite() { self.max.x } else { self.min.x },
            if self.max.y.is_finite() { self.max.y } else { self.min.y },
        )
    }
}

// ── rect helper ──────────────────────────────────────────────────────────

/// Shrink a rect by `edges` (padding/inset).
#[inline]
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints::offered ──────────────────────────────────────────────

    #[test]
    fn offered_is_max_when_bounded() {
        assert_eq!(Constraints::loose(Vec2::new(320.0, 240.0)).offered(), Vec2::new(320.0, 240.0));
        assert_eq!(Constraints::tight(Vec2::new(64.0, 48.0)).offered(), Vec2::new(64.0, 48.0));
    }

    #[test]
    fn offered_falls_back_to_min_when_unbounded() {
        let c = Constraints { min: Vec2::new(12.0, 0.0), max: Vec2::new(f32::INFINITY, 30.0) };
        assert_eq!(c.offered(), Vec2::new(12.0, 30.0));
        assert_eq!(Constraints::unbounded().offered(), Vec2::zero());
    }

    // ── inset_rect ────────────────────────────────────────────────────────

    #[test]
    fn inset_rect_uniform_padding() {
        let inner = inset_rect(Rect::new(0.0, 0.0, 100.0, 80.0), Edges::all(10.0));
        assert_eq!(inner, Rect::new(10.0, 10.0, 80.0, 60.0));
    }

    #[test]
    fn inset_rect_asymmetric_padding() {
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        let inner = inset_rect(Rect::new(5.0, 5.0, 100.0, 60.0), edges);
        assert_eq!(inner.origin.x, 11.0); // 5 + 6
        assert_eq!(inner.origin.y, 9.0);  // 5 + 4
        assert_eq!(inner.size.x, 84.0);   // 100 - 6 - 10
        assert_eq!(inner.size.y, 48.0);   // 60 - 4 - 8
    }

    #[test]
    fn inset_rect_clamps_to_zero() {
        let inner = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Edges::all(20.0));
        assert_eq!(inner.size, Vec2::zero());
    }

    // ── Edges helpers ─────────────────────────────────────────────────────

    #[test]
    fn edges_h_and_v() {
        let e = Edges { top: 4.0, bottom: 4.0, left: 8.0, right: 8.0 };
        assert_eq!(e.h(), 16.0); // left + right
        assert_eq!(e.v(), 8.0);  // top + bottom
    }
}
