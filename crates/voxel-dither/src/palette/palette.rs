//! The fixed block palette and nearest-color matching.
//!
//! Visual fidelity depends on bit-exact matching against the literal table
//! below, so the RGB triples must not be tuned.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// One named reference color and the block that displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Color name (`"red"`, `"light_gray_terracotta"`, ...)
    pub name: &'static str,
    /// Block identifier placed in the world, without namespace
    pub block: &'static str,
    /// Reference color
    pub color: Rgb,
}

impl PaletteEntry {
    /// Create an entry.
    pub const fn new(name: &'static str, block: &'static str, color: Rgb) -> Self {
        Self { name, block, color }
    }
}

const fn concrete(name: &'static str, block: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry::new(name, block, Rgb::new(r, g, b))
}

/// The 21-entry concrete and terracotta table, in matching order.
pub const CONCRETE_ENTRIES: [PaletteEntry; 21] = [
    concrete("white", "white_concrete", 255, 255, 255),
    concrete("light_gray", "light_gray_concrete", 157, 157, 151),
    concrete("gray", "gray_concrete", 71, 79, 82),
    concrete("black", "black_concrete", 16, 16, 16),
    concrete("brown", "brown_concrete", 102, 76, 51),
    concrete("red", "red_concrete", 153, 51, 51),
    concrete("orange", "orange_concrete", 216, 127, 51),
    concrete("yellow", "yellow_concrete", 229, 229, 51),
    concrete("lime", "lime_concrete", 127, 204, 25),
    concrete("green", "green_concrete", 102, 127, 51),
    concrete("cyan", "cyan_concrete", 76, 127, 153),
    concrete("light_blue", "light_blue_concrete", 102, 153, 216),
    concrete("blue", "blue_concrete", 51, 76, 178),
    concrete("purple", "purple_concrete", 127, 63, 178),
    concrete("magenta", "magenta_concrete", 178, 76, 216),
    concrete("pink", "pink_concrete", 242, 127, 165),
    concrete("terracotta", "terracotta", 143, 107, 76),
    concrete("light_gray_terracotta", "light_gray_terracotta", 135, 107, 98),
    concrete("cyan_terracotta", "cyan_terracotta", 86, 91, 91),
    concrete("purple_terracotta", "purple_terracotta", 118, 70, 86),
    concrete("blue_terracotta", "blue_terracotta", 74, 60, 91),
];

/// An ordered, immutable set of palette entries.
///
/// The palette borrows a `'static` table, so it is `Copy` and can be handed
/// around freely; [`Palette::concrete()`] is the process-wide constant used
/// for rendering.
///
/// Matching uses the sum of squared channel differences. Ties go to the
/// first entry in table order, which keeps results deterministic.
///
/// # Example
///
/// ```
/// use voxel_dither::{Palette, Rgb};
///
/// let palette = Palette::concrete();
/// assert_eq!(palette.len(), 21);
/// assert_eq!(palette.nearest(Rgb::new(255, 0, 0)).name, "red");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    entries: &'static [PaletteEntry],
}

impl Palette {
    /// The fixed concrete palette.
    pub const fn concrete() -> Self {
        Self {
            entries: &CONCRETE_ENTRIES,
        }
    }

    /// Create a palette from a custom table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, has more than 256 entries,
    /// or repeats a color or a name.
    pub fn new(entries: &'static [PaletteEntry]) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if entries.len() > 256 {
            return Err(PaletteError::TooManyEntries { len: entries.len() });
        }

        let mut colors = HashSet::new();
        let mut names = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !colors.insert(entry.color) {
                return Err(PaletteError::DuplicateColor { index });
            }
            if !names.insert(entry.name) {
                return Err(PaletteError::DuplicateName { index });
            }
        }

        Ok(Self { entries })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn entry(&self, index: usize) -> &'static PaletteEntry {
        &self.entries[index]
    }

    /// All entries in matching order.
    #[inline]
    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PaletteEntry> {
        self.entries.iter()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn find_by_block(&self, block: &str) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.block == block)
    }

    /// Nearest entry to an 8-bit color.
    #[inline]
    pub fn nearest(&self, color: Rgb) -> &'static PaletteEntry {
        self.entry(self.nearest_index(color) as usize)
    }

    /// Index of the nearest entry to an 8-bit color.
    pub fn nearest_index(&self, color: Rgb) -> u8 {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, entry) in self.entries.iter().enumerate() {
            let d = color.distance_sq(entry.color);
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        best as u8
    }

    /// Index of the nearest entry to a fractional color.
    ///
    /// Used inside the error diffusion loop, where working values carry
    /// accumulated fractional error. Channels are expected in `0.0..=255.0`.
    pub fn nearest_index_f32(&self, color: [f32; 3]) -> u8 {
        let mut best = 0usize;
        let mut best_dist = f32::INFINITY;
        for (i, entry) in self.entries.iter().enumerate() {
            let reference = entry.color.to_f32();
            let dr = color[0] - reference[0];
            let dg = color[1] - reference[1];
            let db = color[2] - reference[2];
            let d = dr * dr + dg * dg + db * db;
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        best as u8
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::concrete()
    }
}
