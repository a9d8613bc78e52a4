//! QuantizedRaster: palette indices plus the palette they refer to.

use crate::color::Rgb;
use crate::palette::{Palette, PaletteEntry};
use crate::raster::Raster;

/// The canonical output of quantization.
///
/// Stores one `u8` palette index per pixel in row-major order. Entries and
/// colors are looked up on demand.
///
/// # Example
///
/// ```
/// use voxel_dither::{Palette, QuantizedRaster};
///
/// let image = QuantizedRaster::new(vec![0, 5, 5, 0], 2, 2, Palette::concrete());
/// assert_eq!(image.entry_at(1, 0).name, "red");
/// assert_eq!(image.entry_at(0, 1).block, "white_concrete");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedRaster {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl QuantizedRaster {
    /// Create from palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Palette entry at (col, row).
    #[inline]
    pub fn entry_at(&self, col: usize, row: usize) -> &'static PaletteEntry {
        self.palette
            .entry(self.indices[row * self.width + col] as usize)
    }

    /// Palette colors as a raster, for previews.
    pub fn to_raster(&self) -> Raster {
        let pixels: Vec<Rgb> = self
            .indices
            .iter()
            .map(|&i| self.palette.entry(i as usize).color)
            .collect();
        Raster::new(self.width, self.height, pixels)
            .unwrap_or_else(|| unreachable!("one color per index"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_fields() {
        let image = QuantizedRaster::new(vec![0, 1, 2, 3, 4, 5], 3, 2, Palette::concrete());
        assert_eq!(image.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.palette().len(), 21);
    }

    #[test]
    fn test_entry_at_is_row_major() {
        let image = QuantizedRaster::new(vec![0, 1, 2, 3, 4, 5], 3, 2, Palette::concrete());
        assert_eq!(image.entry_at(2, 0).name, "gray");
        assert_eq!(image.entry_at(0, 1).name, "black");
    }

    #[test]
    fn test_to_raster_uses_palette_colors() {
        let image = QuantizedRaster::new(vec![5, 12], 2, 1, Palette::concrete());
        let raster = image.to_raster();
        assert_eq!(raster.get(0, 0), Rgb::new(153, 51, 51));
        assert_eq!(raster.get(1, 0), Rgb::new(51, 76, 178));
    }
}
