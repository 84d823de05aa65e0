use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Rounded rectangle draw payload with a uniform corner radius.
///
/// `radius == 0` is a plain rectangle. Radii larger than half the shorter
/// side are clamped by the rasterizer; the command keeps the requested value.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radius: f32, paint: Paint, border: Option<Border>) -> Self {
        Self { rect, radius, paint, border }
    }
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(&mut self, rect: Rect, radius: f32, paint: Paint, border: Option<Border>) {
        self.push(DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radius, paint, border)));
    }
}
