//! Floyd-Steinberg error diffusion with a flat-region fast path.

use super::buffer::WorkBuffer;
use super::kernel::FLOYD_STEINBERG;
use super::uniform::is_uniform_region;
use super::{Dither, DitherOptions};
use crate::palette::Palette;
use crate::raster::Raster;

/// What to do with one pixel's quantization residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelStep {
    /// Flat neighborhood: quantize, emit no error.
    Flat,
    /// Quantize and diffuse the residual to unvisited neighbors.
    Diffuse,
}

impl PixelStep {
    /// Decide the step for (x, y) from the source raster.
    pub fn classify(source: &Raster, x: usize, y: usize, options: &DitherOptions) -> Self {
        if options.skip_uniform && is_uniform_region(source, x, y, options.uniform_threshold) {
            PixelStep::Flat
        } else {
            PixelStep::Diffuse
        }
    }
}

/// Floyd-Steinberg error diffusion dithering.
///
/// Pixels are visited in row-major order. Each pixel's working value
/// (source plus received error) is matched to the nearest palette entry;
/// unless the pixel sits in a flat region, the residual is spread with the
/// classic weights:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Working values are not clamped, so a residual that overshoots a
/// channel limit keeps flowing. Output indices always name palette colors,
/// which are in range by construction.
///
/// Fully deterministic for a given raster and options.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, source: &Raster, palette: &Palette, options: &DitherOptions) -> Vec<u8> {
        let width = source.width();
        let height = source.height();
        let mut work = WorkBuffer::from_raster(source);
        let mut output = vec![0u8; width * height];

        for y in 0..height {
            for x in 0..width {
                let value = work.value(x, y);
                let chosen = palette.nearest_index_f32(value);
                output[y * width + x] = chosen;

                match PixelStep::classify(source, x, y, options) {
                    PixelStep::Flat => {}
                    PixelStep::Diffuse => {
                        let target = palette.entry(chosen as usize).color.to_f32();
                        let error = [
                            value[0] - target[0],
                            value[1] - target[1],
                            value[2] - target[2],
                        ];
                        work.diffuse(x, y, error, &FLOYD_STEINBERG);
                    }
                }
            }
        }

        output
    }
}
