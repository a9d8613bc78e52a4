//! Decoding and preparing source images for a surface.

use image::imageops::FilterType;
use image::RgbImage;
use std::path::Path;

use voxel_dither::{adjust_contrast, Raster, DEFAULT_CONTRAST};

use crate::error::SourceError;

/// Produces rasters sized for one surface.
///
/// Images are converted to RGB8 (alpha is dropped), resized with Lanczos3
/// when their size differs from the target and then contrast-boosted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSource {
    width: u32,
    height: u32,
    contrast: f32,
}

impl ImageSource {
    pub fn new(width: u32, height: u32) -> Result<Self, SourceError> {
        if width == 0 || height == 0 {
            return Err(SourceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            contrast: DEFAULT_CONTRAST,
        })
    }

    /// Contrast factor; 1.0 leaves pixels untouched
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    pub fn load_path(&self, path: &Path) -> Result<Raster, SourceError> {
        let bytes = std::fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read source image");
        self.load_bytes(&bytes)
    }

    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Raster, SourceError> {
        let decoded = image::load_from_memory(bytes)?;
        self.prepare(decoded.to_rgb8())
    }

    /// Resize and enhance an already decoded image
    pub fn prepare(&self, image: RgbImage) -> Result<Raster, SourceError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SourceError::EmptyImage);
        }

        let resized = if image.dimensions() == (self.width, self.height) {
            image
        } else {
            tracing::debug!(
                from = ?image.dimensions(),
                to = ?(self.width, self.height),
                "Resizing source image"
            );
            image::imageops::resize(&image, self.width, self.height, FilterType::Lanczos3)
        };

        let raster = Raster::from_rgb8(
            self.width as usize,
            self.height as usize,
            resized.as_raw(),
        )
        .ok_or(SourceError::InvalidDimensions {
            width: self.width,
            height: self.height,
        })?;

        if (self.contrast - 1.0).abs() < f32::EPSILON {
            Ok(raster)
        } else {
            Ok(adjust_contrast(&raster, self.contrast))
        }
    }
}
