//! Dimensions of product images.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::warn;

use crate::error::Result;

/// Size information about a product image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageMetrics {
    pub width: u32,
    pub height: u32,
}

impl ImageMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reads the dimensions from an image file header.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self::new(width, height))
    }

    /// Reads the dimensions of an encoded image, e.g. an upload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Self::new(width, height))
    }

    /// Like [`from_path`](Self::from_path), but a missing or unreadable
    /// image counts as empty.
    pub fn from_path_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::from_path(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "unreadable product image");
            Self::default()
        })
    }

    /// Total pixel count.
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Width divided by height, or 0 for an empty image.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            f64::from(self.width) / f64::from(self.height)
        }
    }

    /// True if the image has at least one pixel.
    pub fn is_valid(&self) -> bool {
        self.pixels() > 0
    }

    /// Human-readable dimensions, e.g. `400 x 300 pixels`.
    pub fn dimensions_label(&self) -> String {
        format!("{} x {} pixels", self.width, self.height)
    }
}
