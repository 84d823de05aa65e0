use cameo_engine::coords::{Rect, Vec2};
use cameo_engine::render::{Renderer, Surface};
use cameo_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `DrawList` populated by [`frame`](Self::frame) and the engine
/// `Renderer` (and with it the image pattern cache) used by
/// [`render`](Self::render).
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut surface = Surface::new(200, 200)?;
///
/// // Per frame:
/// ui.render(&avatar, &mut surface);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    renderer: Renderer,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), renderer: Renderer::new() }
    }

    /// Runs measure and paint for one frame and returns the recorded commands.
    ///
    /// The root is measured with loose constraints bounded by `viewport` and
    /// painted into the full viewport rect.
    pub fn frame<W: Widget + ?Sized>(&mut self, root: &W, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();

        let _ = root.measure(Constraints::loose(viewport));

        let mut painter = Painter::new(&mut self.draw_list);
        root.paint(&mut painter, Rect::from_size(viewport));

        log::trace!("ui frame: {} commands", self.draw_list.len());
        &self.draw_list
    }

    /// Records a frame sized to `surface` and rasterizes it.
    ///
    /// The surface is not cleared first.
    pub fn render<W: Widget + ?Sized>(&mut self, root: &W, surface: &mut Surface) {
        self.frame(root, surface.viewport().size());
        self.renderer.render(surface, &self.draw_list);
        log::trace!("ui render: {} image patterns cached", self.renderer.cached_patterns());
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
