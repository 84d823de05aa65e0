//! Cameo UI: widget layer on top of `cameo-engine`.
//!
//! Widgets measure against [`Constraints`](constraints::Constraints), record
//! draw commands through a [`Painter`](painter::Painter), and a
//! [`UiScene`](scene::UiScene) rasterizes the result onto a surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cameo_ui::prelude::*;
//!
//! let config = RenderConfig::new().circle(true).border_width(6).border_color(Color::white());
//! let avatar = RoundedImage::new(config).image(SourceImage::open("me.png")?);
//!
//! let mut surface = Surface::new(128, 128)?;
//! UiScene::new().render(&avatar, &mut surface);
//! surface.save_png("avatar.png")?;
//! ```

pub mod attrs;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and render widgets.
pub mod prelude {
    pub use crate::attrs::{AttrError, AttrSet};
    pub use crate::constraints::{Constraints, Edges};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::rounded_image::{RenderConfig, RoundedImage, RoundedImageRenderer};

    // Re-export the engine primitives everyone needs.
    pub use cameo_engine::coords::{Rect, Vec2, Viewport};
    pub use cameo_engine::image::SourceImage;
    pub use cameo_engine::paint::{Color, Paint};
    pub use cameo_engine::render::Surface;
    pub use cameo_engine::scene::Border;
}
