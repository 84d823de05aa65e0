use tiny_skia::{PathBuilder, Pixmap};

use crate::render::pattern::PatternCache;
use crate::scene::CircleCmd;

use super::common::{fill_and_stroke, fill_paint};

/// Rasterizes a `DrawCmd::Circle`.
///
/// Non-positive or non-finite radii draw nothing.
pub(crate) fn draw(pixmap: &mut Pixmap, cmd: &CircleCmd, patterns: &PatternCache) {
    if !(cmd.radius > 0.0 && cmd.radius.is_finite()) || !cmd.center.is_finite() {
        return;
    }
    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
        return;
    };
    let Some(paint) = fill_paint(&cmd.paint, patterns) else {
        log::debug!("circle paint unavailable; skipped");
        return;
    };
    fill_and_stroke(pixmap, &path, &paint, cmd.border.as_ref());
}
