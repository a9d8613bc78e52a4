//! Public API for the voxel-dither crate.
//!
//! This module provides the high-level [`Quantizer`] builder.

mod quantizer;

pub use quantizer::Quantizer;
