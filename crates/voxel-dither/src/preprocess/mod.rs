//! Image preprocessing applied before quantization.
//!
//! Resizing happens upstream where the image is decoded; this module only
//! holds the color adjustments that operate on an already-sized [`Raster`].
//!
//! [`Raster`]: crate::Raster

mod contrast;

pub use contrast::{adjust_contrast, mean_luma, DEFAULT_CONTRAST};
