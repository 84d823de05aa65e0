//! Paint and stroke helpers shared by the shape rasterizers.

use tiny_skia::{FillRule, FilterQuality, Path, Pattern, Pixmap, Stroke, Transform};

use crate::paint::{Color, Paint};
use crate::render::pattern::PatternCache;
use crate::scene::Border;

// ── color ─────────────────────────────────────────────────────────────────

pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_straight_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn solid(color: Color) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

// ── paint resolution ──────────────────────────────────────────────────────

/// Converts a `Paint` into a tiny-skia fill paint.
///
/// Image patterns are sampled 1:1 (nearest) because the widget layer hands
/// over images already resampled to their on-screen size. Returns `None` when
/// the pattern image was never prepared (zero-sized image).
pub(super) fn fill_paint<'a>(paint: &Paint, patterns: &'a PatternCache) -> Option<tiny_skia::Paint<'a>> {
    match paint {
        Paint::Solid(c) => Some(solid(*c)),
        Paint::Image(img) => {
            let pixmap = patterns.get(img.image.id())?;
            let mut out = tiny_skia::Paint::default();
            out.shader = Pattern::new(
                pixmap.as_ref(),
                tiny_skia::SpreadMode::Pad,
                FilterQuality::Nearest,
                1.0,
                Transform::from_translate(img.origin.x, img.origin.y),
            );
            out.anti_alias = true;
            Some(out)
        }
    }
}

// ── fill + stroke ─────────────────────────────────────────────────────────

/// Fills `path`, then strokes it with `border` centred on the outline.
pub(super) fn fill_and_stroke(
    pixmap: &mut Pixmap,
    path: &Path,
    paint: &tiny_skia::Paint<'_>,
    border: Option<&Border>,
) {
    pixmap.fill_path(path, paint, FillRule::Winding, Transform::identity(), None);

    let Some(border) = border.filter(|b| b.width > 0.0 && b.width.is_finite()) else { return };
    let stroke = Stroke { width: border.width, ..Stroke::default() };
    pixmap.stroke_path(path, &solid(border.color), &stroke, Transform::identity(), None);
}
