//! CPU rasterizer.
//!
//! The [`Renderer`] replays a [`DrawList`] onto a [`Surface`] in paint order.
//! Each shape kind has its own module under `render::shapes`.
//!
//! Convention:
//! - geometry is in device pixels (top-left origin, +Y down)
//! - fills are anti-aliased; borders are strokes centred on the outline

mod pattern;
pub mod shapes;
mod surface;

pub use surface::Surface;

use crate::scene::{DrawCmd, DrawList};

use pattern::PatternCache;

/// Replays draw streams onto surfaces.
///
/// Keeps a premultiplied copy of every image used as a pattern so repeated
/// frames with the same image skip the conversion.
#[derive(Default)]
pub struct Renderer {
    patterns: PatternCache,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rasterizes `draw_list` onto `surface`. Existing pixels are blended over,
    /// not cleared.
    pub fn render(&mut self, surface: &mut Surface, draw_list: &DrawList) {
        log::trace!("rendering {} commands", draw_list.len());
        self.patterns.prepare(draw_list);

        let pixmap = surface.pixmap_mut();
        for cmd in draw_list.iter() {
            match cmd {
                DrawCmd::Circle(c) => shapes::circle::draw(pixmap, c, &self.patterns),
                DrawCmd::RoundedRect(r) => shapes::rounded_rect::draw(pixmap, r, &self.patterns),
            }
        }
    }

    /// Number of image patterns currently held.
    pub fn cached_patterns(&self) -> usize {
        self.patterns.len()
    }
}
