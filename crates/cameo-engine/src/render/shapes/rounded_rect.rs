use tiny_skia::{Path, PathBuilder, Pixmap};

use crate::coords::Rect;
use crate::render::pattern::PatternCache;
use crate::scene::RoundedRectCmd;

use super::common::{fill_and_stroke, fill_paint};

/// Cubic control-point distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Rasterizes a `DrawCmd::RoundedRect`.
pub(crate) fn draw(pixmap: &mut Pixmap, cmd: &RoundedRectCmd, patterns: &PatternCache) {
    let Some(path) = rounded_rect_path(cmd.rect, cmd.radius) else { return };
    let Some(paint) = fill_paint(&cmd.paint, patterns) else {
        log::debug!("rounded rect paint unavailable; skipped");
        return;
    };
    fill_and_stroke(pixmap, &path, &paint, cmd.border.as_ref());
}

/// Builds the outline of `rect` with uniform corner `radius`.
///
/// The radius is clamped to `[0, min(w, h) / 2]`. Empty or non-finite rects
/// produce `None`.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.is_empty() || !rect.is_finite() {
        return None;
    }
    let (x, y, w, h) = (rect.origin.x, rect.origin.y, rect.size.x, rect.size.y);
    let r = if radius.is_finite() { radius.clamp(0.0, w.min(h) / 2.0) } else { 0.0 };

    if r <= 0.0 {
        return Some(PathBuilder::from_rect(tiny_skia::Rect::from_xywh(x, y, w, h)?));
    }

    let c = r * (1.0 - KAPPA);
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - c, y, right, y + c, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - c, right - c, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + c, bottom, x, bottom - c, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + c, x + c, y, x + r, y);
    pb.close();
    pb.finish()
}
