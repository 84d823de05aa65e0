//! Renders an image through the rounded image widget and writes a PNG.
//!
//! ```text
//! cameo-studio avatar.jpg -o out.png --circle --border-width 4dp --border-color '#ff2196f3'
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use cameo_engine::logging::{LoggingConfig, init_logging};
use cameo_ui::prelude::*;
use cameo_ui::widgets::rounded_image::{ATTR_BORDER_COLOR, ATTR_BORDER_WIDTH, ATTR_CIRCLE, ATTR_RADIUS};

#[derive(Parser, Debug)]
#[command(version, about = "Render an image clipped to a circle or rounded rect")]
struct Args {
    /// Source image (PNG, JPEG, BMP, GIF, ICO, TIFF, WebP or SVG).
    input: PathBuf,
    /// Path to output PNG.
    #[clap(short = 'o', long)]
    output: PathBuf,
    /// Surface width in pixels.
    #[clap(long, default_value_t = 200)]
    width: u32,
    /// Surface height in pixels.
    #[clap(long, default_value_t = 200)]
    height: u32,
    /// Padding around the widget on every side, in pixels.
    #[clap(long, default_value_t = 0.0)]
    padding: f32,
    /// Display density used for `dp`/`sp` and physical units.
    #[clap(long, default_value_t = 1.0)]
    density: f32,
    /// Raw attributes, e.g. "radius=8dp circle=false". Flags below override them.
    #[clap(long)]
    attrs: Option<String>,
    /// Corner radius, e.g. `12dp`.
    #[clap(long)]
    radius: Option<String>,
    /// Clip to a circle instead of a rounded rect.
    #[clap(long)]
    circle: bool,
    /// Border color as `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
    #[clap(long)]
    border_color: Option<String>,
    /// Border width, e.g. `2dp`.
    #[clap(long)]
    border_width: Option<String>,
    /// Only log warnings and errors.
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn attr_set(&self) -> Result<AttrSet> {
        let mut attrs = match &self.attrs {
            Some(src) => AttrSet::parse(src, self.density)?,
            None => AttrSet::new(self.density),
        };
        if let Some(radius) = &self.radius {
            attrs.set(ATTR_RADIUS, radius.as_str());
        }
        if self.circle {
            attrs.set(ATTR_CIRCLE, "true");
        }
        if let Some(color) = &self.border_color {
            attrs.set(ATTR_BORDER_COLOR, color.as_str());
        }
        if let Some(width) = &self.border_width {
            attrs.set(ATTR_BORDER_WIDTH, width.as_str());
        }
        Ok(attrs)
    }
}

fn load_source(path: &Path) -> Result<SourceImage> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let image = if is_svg {
        let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        SourceImage::from_svg_data(&data)
    } else {
        SourceImage::open(path)
    };
    image.with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(if args.quiet { LoggingConfig::quiet() } else { LoggingConfig::default() });

    let config = RenderConfig::from_attrs(&args.attr_set()?)?;
    let source = load_source(&args.input)?;
    log::info!(
        "{}: {}x{} -> {}x{} ({})",
        args.input.display(),
        source.width(),
        source.height(),
        args.width,
        args.height,
        if config.is_circle() { "circle" } else { "rounded rect" },
    );

    let root = Element::new(
        RoundedImage::new(config)
            .image(source)
            .padding(Edges::all(args.padding.max(0.0))),
    );

    let mut surface = Surface::new(args.width, args.height)?;
    UiScene::new().render(&root, &mut surface);
    surface.save_png(&args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_raw_attrs() {
        let args = Args::try_parse_from([
            "cameo-studio",
            "in.png",
            "-o",
            "out.png",
            "--density",
            "2",
            "--attrs",
            "radius=4dp border_width=1dp",
            "--radius",
            "10dp",
            "--circle",
        ])
        .unwrap();
        let config = RenderConfig::from_attrs(&args.attr_set().unwrap()).unwrap();
        assert_eq!(config.radius(), 20.0);
        assert_eq!(config.width(), 2);
        assert!(config.is_circle());
    }

    #[test]
    fn defaults_to_200_square() {
        let args = Args::try_parse_from(["cameo-studio", "in.png", "-o", "out.png"]).unwrap();
        assert_eq!((args.width, args.height), (200, 200));
        assert_eq!(RenderConfig::from_attrs(&args.attr_set().unwrap()).unwrap(), RenderConfig::default());
    }

    #[test]
    fn bad_color_is_reported() {
        let args = Args::try_parse_from(["cameo-studio", "in.png", "-o", "o.png", "--border-color", "blue"]).unwrap();
        assert!(RenderConfig::from_attrs(&args.attr_set().unwrap()).is_err());
    }
}
