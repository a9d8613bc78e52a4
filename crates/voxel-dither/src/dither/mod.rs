//! Palette quantization algorithms.
//!
//! Two algorithms implement the [`Dither`] trait:
//!
//! - [`FloydSteinberg`]: error diffusion with a flat-region fast path
//! - [`Nearest`]: straight nearest-color mapping, no error carried
//!
//! Configuration is done via [`DitherOptions`]; [`DitherOptions::dithering`]
//! decides which of the two the [`Quantizer`](crate::Quantizer) runs.
//!
//! # Per-pixel decision
//!
//! Error diffusion makes one explicit two-way decision per pixel
//! ([`PixelStep`]):
//!
//! 1. **Flat**: the pixel's 3x3 neighborhood in the *source* raster deviates
//!    from the center by at most `uniform_threshold` on every channel. The
//!    pixel is quantized and no error is propagated. Skies and solid
//!    backgrounds stay solid instead of picking up dither noise.
//! 2. **Diffuse**: the pixel is quantized and the residual (working value
//!    minus palette color) is spread to the unvisited neighbors.
//!
//! Working values live in an owned [`WorkBuffer`], separate from the
//! immutable source raster. They are matched as they are, without clamping,
//! so error beyond a channel limit is never lost.

mod buffer;
mod floyd_steinberg;
mod kernel;
mod options;
mod uniform;

pub use buffer::WorkBuffer;
pub use floyd_steinberg::{FloydSteinberg, PixelStep};
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::{DitherOptions, DEFAULT_UNIFORM_THRESHOLD};
pub use uniform::is_uniform_region;

use crate::palette::Palette;
use crate::raster::Raster;

/// Trait for quantization algorithms.
pub trait Dither {
    /// Quantize a raster to palette indices.
    ///
    /// Returns one index per pixel, row-major, each in `0..palette.len()`.
    fn dither(&self, source: &Raster, palette: &Palette, options: &DitherOptions) -> Vec<u8>;
}

/// Nearest-color mapping without error diffusion.
pub struct Nearest;

impl Dither for Nearest {
    fn dither(&self, source: &Raster, palette: &Palette, _options: &DitherOptions) -> Vec<u8> {
        source
            .pixels()
            .iter()
            .map(|&p| palette.nearest_index(p))
            .collect()
    }
}
