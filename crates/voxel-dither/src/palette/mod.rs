//! Palette types
//!
//! This module provides the fixed block palette, nearest-color matching and
//! the validation error for custom palettes.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PaletteEntry, CONCRETE_ENTRIES};
