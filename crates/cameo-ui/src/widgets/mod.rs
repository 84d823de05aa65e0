pub mod rounded_image;

pub use rounded_image::RoundedImage;
