//! Coordinate and geometry types shared across the rasterizer and UI.
//!
//! Canonical CPU space:
//! - Device pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
