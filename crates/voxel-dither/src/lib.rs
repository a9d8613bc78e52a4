//! voxel-dither: palette quantization for block-built image walls
//!
//! This library turns an RGB raster into a raster of palette entries from a
//! small, fixed table of block colors, using Floyd-Steinberg error diffusion
//! to keep gradients readable.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use voxel_dither::{Palette, Quantizer, Raster, Rgb};
//!
//! let quantizer = Quantizer::new(Palette::concrete()).contrast(1.2);
//! let raster = Raster::filled(4, 2, Rgb::new(120, 130, 140));
//! let result = quantizer.quantize(&raster);
//!
//! assert_eq!(result.width(), 4);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Raster (8-bit RGB, already resized)
//!     |
//!     v
//! [Contrast]          stretch channels away from the mean luma
//!     |
//!     v
//! [Quantize]          per pixel, row-major:
//!     |                 working value (source + received error, unclamped)
//!     |                 -> nearest palette entry (squared RGB distance)
//!     |                 -> flat neighborhood? keep error : diffuse 7/3/5/1
//!     v
//! QuantizedRaster     palette indices + palette
//! ```
//!
//! # Color Matching
//!
//! Matching is plain squared Euclidean distance on the 8-bit channel values.
//! The palette is small and every block color is authored in those units, so
//! bit-exact matching against the table matters more than perceptual
//! accuracy. Ties go to the earliest table entry.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod raster;


pub use api::Quantizer;
pub use color::Rgb;
pub use dither::{Dither, DitherOptions, FloydSteinberg, Nearest};
pub use output::QuantizedRaster;
pub use palette::{Palette, PaletteEntry, PaletteError, CONCRETE_ENTRIES};
pub use preprocess::{adjust_contrast, DEFAULT_CONTRAST};
pub use raster::Raster;
