//! Typed markup attributes.
//!
//! An [`AttrSet`] holds raw `name=value` strings as they appear in markup
//! together with the display density needed to resolve density-independent
//! units. Getters parse on demand and report the offending attribute on
//! failure. Names that no widget asks for are ignored.

use std::fmt;

use cameo_engine::paint::Color;

/// Pixels per inch at density 1.0.
const BASE_DPI: f32 = 160.0;

// ── AttrError ─────────────────────────────────────────────────────────────

/// An attribute value that could not be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrError {
    pub attr: String,
    pub message: String,
}

impl AttrError {
    pub(crate) fn new(attr: impl Into<String>, message: impl Into<String>) -> Self {
        Self { attr: attr.into(), message: message.into() }
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute `{}`: {}", self.attr, self.message)
    }
}

impl std::error::Error for AttrError {}

// ── AttrSet ───────────────────────────────────────────────────────────────

/// Raw attribute values plus the display density used to resolve them.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrSet {
    density: f32,
    entries: Vec<(String, String)>,
}

impl AttrSet {
    /// Empty set. A non-positive or non-finite `density` falls back to 1.0.
    pub fn new(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        Self { density, entries: Vec::new() }
    }

    /// Parses whitespace-separated `name=value` pairs.
    ///
    /// ```rust,ignore
    /// let attrs = AttrSet::parse("circle=true border_width=2dp", 2.0)?;
    /// ```
    pub fn parse(src: &str, density: f32) -> Result<Self, AttrError> {
        let mut set = Self::new(density);
        for token in src.split_whitespace() {
            let Some((name, value)) = token.split_once('=') else {
                return Err(AttrError::new(token, "expected `name=value`"));
            };
            if name.is_empty() {
                return Err(AttrError::new(token, "missing attribute name"));
            }
            set.set(name, value);
        }
        Ok(set)
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── typed getters ─────────────────────────────────────────────────────

    /// Dimension rounded to whole pixels.
    ///
    /// Rounds half away from zero; a non-zero dimension never becomes 0.
    pub fn dimension_px(&self, name: &str, default: i32) -> Result<i32, AttrError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => parse_dimension(raw, self.density)
                .map(whole_pixels)
                .map_err(|msg| AttrError::new(name, format!("{raw:?}: {msg}"))),
        }
    }

    pub fn boolean(&self, name: &str, default: bool) -> Result<bool, AttrError> {
        match self.get(name) {
            None => Ok(default),
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(raw) => Err(AttrError::new(name, format!("{raw:?}: expected `true` or `false`"))),
        }
    }

    pub fn color(&self, name: &str, default: Color) -> Result<Color, AttrError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => {
                parse_color(raw).map_err(|msg| AttrError::new(name, format!("{raw:?}: {msg}")))
            }
        }
    }
}

// ── value parsers ─────────────────────────────────────────────────────────

/// Parses `<number><unit>` into fractional pixels.
///
/// Units: `px`, `dp`/`dip`, `sp`, `pt`, `in`, `mm`. A bare number is pixels.
pub fn parse_dimension(value: &str, density: f32) -> Result<f32, String> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let number: f32 = number.parse().map_err(|_| format!("invalid number `{number}`"))?;
    if !number.is_finite() {
        return Err("dimension must be finite".into());
    }

    let dpi = density * BASE_DPI;
    let scale = match unit.trim() {
        "" | "px" => 1.0,
        "dp" | "dip" | "sp" => density,
        "pt" => dpi / 72.0,
        "in" => dpi,
        "mm" => dpi / 25.4,
        other => return Err(format!("unknown unit `{other}`")),
    };
    Ok(number * scale)
}

/// `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
pub fn parse_color(value: &str) -> Result<Color, String> {
    let hex = value
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| "color must start with `#`".to_string())?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex digits `{hex}`"));
    }
    let digits = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;

    let argb = match hex.len() {
        3 => 0xFF00_0000 | expand_nibbles(digits, 3),
        4 => expand_nibbles(digits, 4),
        6 => 0xFF00_0000 | digits,
        8 => digits,
        n => return Err(format!("expected 3, 4, 6 or 8 hex digits, got {n}")),
    };
    Ok(Color::from_argb(argb))
}

/// `0xRGB` → `0xRRGGBB` (and likewise with alpha).
fn expand_nibbles(digits: u32, count: u32) -> u32 {
    (0..count).fold(0, |acc, i| {
        let nibble = (digits >> ((count - 1 - i) * 4)) & 0xF;
        (acc << 8) | (nibble * 0x11)
    })
}

fn whole_pixels(px: f32) -> i32 {
    let rounded = (if px >= 0.0 { px + 0.5 } else { px - 0.5 }) as i32;
    if rounded != 0 {
        rounded
    } else if px == 0.0 {
        0
    } else if px > 0.0 {
        1
    } else {
        -1
    }
}
