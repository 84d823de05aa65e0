use cameo_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the parent.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget.
///
/// `Element` is itself a `Widget`, so it can be handed anywhere a concrete
/// widget is accepted.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }
}

impl Widget for Element {
    #[inline]
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.0.measure(constraints)
    }

    #[inline]
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }
}
