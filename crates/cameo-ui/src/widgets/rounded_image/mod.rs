//! Image widget masked to a rounded rectangle or a circle, with an optional
//! solid border.

mod config;
pub mod normalize;
mod renderer;

pub use config::{ATTR_BORDER_COLOR, ATTR_BORDER_WIDTH, ATTR_CIRCLE, ATTR_RADIUS, RenderConfig};
pub use normalize::{CropRegion, NormalizeCache, NormalizedImage};
pub use renderer::RoundedImageRenderer;

use std::cell::RefCell;

use cameo_engine::coords::{Rect, Vec2, Viewport};
use cameo_engine::image::SourceImage;

use crate::constraints::{Constraints, Edges, inset_rect};
use crate::painter::Painter;
use crate::widget::Widget;

/// Displays an image clipped to a circle or rounded rect.
///
/// Takes whatever size its parent offers and paints into the padded
/// content box. Without an image nothing is drawn, border included.
///
/// ```rust,ignore
/// RoundedImage::new(RenderConfig::new().corner_radius(8.0))
///     .image(SourceImage::open("cover.jpg")?)
///     .padding(Edges::all(4.0))
/// ```
pub struct RoundedImage {
    image: Option<SourceImage>,
    padding: Edges,
    renderer: RefCell<RoundedImageRenderer>,
}

impl RoundedImage {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            image: None,
            padding: Edges::default(),
            renderer: RefCell::new(RoundedImageRenderer::new(config)),
        }
    }

    pub fn image(mut self, image: SourceImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Swaps the displayed image; takes effect on the next frame.
    pub fn set_image(&mut self, image: Option<SourceImage>) {
        self.image = image;
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    pub fn config(&self) -> RenderConfig {
        *self.renderer.borrow().config()
    }

    /// Number of crop-and-scale passes run so far.
    pub fn normalize_count(&self) -> u64 {
        self.renderer.borrow().cache().misses()
    }
}

impl Widget for RoundedImage {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.offered()
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let content = inset_rect(rect, self.padding);
        let viewport = Viewport::from_size(content.size);

        painter.save();
        painter.translate(content.origin.x, content.origin.y);
        self.renderer.borrow_mut().render(painter, self.image.as_ref(), viewport);
        painter.restore();
    }
}
