//! Cameo engine crate.
//!
//! Owns the renderer-agnostic pieces used by the widget layer: geometry,
//! paint sources, decoded rasters, the draw stream, and the CPU rasterizer
//! that replays a draw stream onto a pixel surface.

pub mod coords;
pub mod image;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
