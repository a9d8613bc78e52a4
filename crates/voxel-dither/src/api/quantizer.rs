//! Quantizer builder -- the primary entry point for the crate.

use crate::dither::{Dither, DitherOptions, FloydSteinberg, Nearest};
use crate::output::QuantizedRaster;
use crate::palette::Palette;
use crate::preprocess::adjust_contrast;
use crate::raster::Raster;

/// High-level quantization builder.
///
/// Wraps optional contrast adjustment and the selected algorithm behind a
/// fluent API. [`quantize()`](Self::quantize) takes `&self`, so one builder
/// can be reused across rasters.
///
/// # Example
///
/// ```
/// use voxel_dither::{Palette, Quantizer, Raster, Rgb};
///
/// let quantizer = Quantizer::new(Palette::concrete()).dithering(false);
/// let raster = Raster::filled(2, 2, Rgb::new(150, 50, 50));
/// let result = quantizer.quantize(&raster);
///
/// assert_eq!(result.width(), 2);
/// assert!(result.indices().iter().all(|&i| i == 5));
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    options: DitherOptions,
    contrast: Option<f32>,
}

impl Quantizer {
    /// Create a quantizer with default options and no contrast adjustment.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            options: DitherOptions::default(),
            contrast: None,
        }
    }

    /// Replace all dithering options at once.
    #[inline]
    pub fn options(mut self, options: DitherOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn dithering(mut self, enabled: bool) -> Self {
        self.options = self.options.dithering(enabled);
        self
    }

    #[inline]
    pub fn skip_uniform(mut self, enabled: bool) -> Self {
        self.options = self.options.skip_uniform(enabled);
        self
    }

    /// Apply a contrast boost before quantizing.
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = Some(factor);
        self
    }

    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    #[inline]
    pub fn dither_options(&self) -> &DitherOptions {
        &self.options
    }

    /// Quantize a raster to the palette.
    ///
    /// Output dimensions always equal input dimensions.
    pub fn quantize(&self, raster: &Raster) -> QuantizedRaster {
        let adjusted;
        let source = match self.contrast {
            Some(factor) => {
                adjusted = adjust_contrast(raster, factor);
                &adjusted
            }
            None => raster,
        };

        let indices = if source.pixels().is_empty() {
            Vec::new()
        } else if self.options.dithering {
            FloydSteinberg.dither(source, &self.palette, &self.options)
        } else {
            Nearest.dither(source, &self.palette, &self.options)
        };

        QuantizedRaster::new(indices, source.width(), source.height(), self.palette)
    }
}
