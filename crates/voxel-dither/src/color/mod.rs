//! Color types
//!
//! Everything in this crate works on plain 8-bit sRGB triples. Distances are
//! measured directly on the encoded channel values, without gamma decoding or
//! perceptual weighting, so that matching stays bit-exact against the fixed
//! block palette.
//!
//! # Example
//!
//! ```
//! use voxel_dither::Rgb;
//!
//! let a = Rgb::new(10, 20, 30);
//! let b = Rgb::new(13, 16, 30);
//! assert_eq!(a.distance_sq(b), 9 + 16);
//! ```

mod rgb;

pub use rgb::Rgb;
