use cameo_engine::paint::Color;

use crate::attrs::{AttrError, AttrSet};

pub const ATTR_RADIUS: &str = "radius";
pub const ATTR_CIRCLE: &str = "circle";
pub const ATTR_BORDER_COLOR: &str = "border_color";
pub const ATTR_BORDER_WIDTH: &str = "border_width";

/// Shape and border settings for a [`RoundedImage`](super::RoundedImage).
///
/// Built once and then read-only. `corner_radius` is ignored in circle mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    corner_radius: f32,
    circle: bool,
    border_color: Color,
    border_width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            circle: false,
            border_color: Color::white(),
            border_width: 0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `radius`, `circle`, `border_color` and `border_width`.
    ///
    /// Missing attributes keep their defaults. A negative border width is an
    /// error.
    pub fn from_attrs(attrs: &AttrSet) -> Result<Self, AttrError> {
        let radius = attrs.dimension_px(ATTR_RADIUS, 0)?;
        let circle = attrs.boolean(ATTR_CIRCLE, false)?;
        let border_color = attrs.color(ATTR_BORDER_COLOR, Color::white())?;
        let border_width = attrs.dimension_px(ATTR_BORDER_WIDTH, 0)?;
        let border_width = u32::try_from(border_width).map_err(|_| {
            AttrError::new(ATTR_BORDER_WIDTH, format!("must not be negative, got {border_width}px"))
        })?;

        let config = Self::new()
            .corner_radius(radius as f32)
            .circle(circle)
            .border_color(border_color)
            .border_width(border_width);
        log::debug!("rounded image config from attrs: {config:?}");
        Ok(config)
    }

    // ── builder ───────────────────────────────────────────────────────────

    /// Corner radius in pixels. Negative or non-finite values become 0.
    #[must_use]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        self
    }

    #[must_use]
    pub fn circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = width;
        self
    }

    // ── getters ───────────────────────────────────────────────────────────

    #[inline]
    pub fn radius(&self) -> f32 {
        self.corner_radius
    }

    #[inline]
    pub fn is_circle(&self) -> bool {
        self.circle
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.border_color
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.border_width
    }

    /// Radius of the image shape in rounded-rect mode given the border width
    /// actually drawn: the configured radius without a border, sharp corners
    /// with one.
    #[inline]
    pub fn image_corner_radius(&self, border: u32) -> f32 {
        if border == 0 { self.corner_radius } else { 0.0 }
    }
}
