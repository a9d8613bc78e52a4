//! Output type of the quantization pipeline.
//!
//! [`QuantizedRaster`] stores palette indices with dimension metadata and
//! the palette they index into.

mod quantized;

pub use quantized::QuantizedRaster;
