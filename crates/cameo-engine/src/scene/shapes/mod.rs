pub(crate) mod circle;
pub(crate) mod rounded_rect;

use crate::paint::Color;

/// Stroke centred on the outline of a shape.
///
/// The shape is filled first and then stroked, so half of `width` lands
/// outside the nominal geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
