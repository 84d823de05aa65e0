//! Per-shape rasterizers. Each consumes one `DrawCmd` variant.

pub mod circle;
pub(crate) mod common;
pub mod rounded_rect;
