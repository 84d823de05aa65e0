use std::fmt;

/// Failure to produce a [`SourceImage`](super::SourceImage).
#[derive(Debug)]
pub enum ImageError {
    /// The raster decoder rejected the input.
    Decode(image::ImageError),
    /// The SVG document could not be parsed.
    Svg(String),
    /// A raster of the requested size could not be allocated.
    Raster { width: u32, height: u32 },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(e) => write!(f, "image decode failed: {e}"),
            ImageError::Svg(msg) => write!(f, "svg parse failed: {msg}"),
            ImageError::Raster { width, height } => {
                write!(f, "cannot allocate a {width}x{height} raster")
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        ImageError::Decode(e)
    }
}
