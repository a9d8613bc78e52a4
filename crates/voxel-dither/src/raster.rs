//! Row-major raster of 8-bit colors.

use crate::color::Rgb;

/// A 2D array of colors, `height` rows of `width` pixels, row-major.
///
/// Row 0 is the top of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Wrap a pixel vector.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster of one repeated color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Build from packed `RGBRGB...` bytes.
    ///
    /// Returns `None` if the buffer length is not `width * height * 3`.
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 3 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from rows of colors; all rows must have the same length.
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Self::new(width, height, rows.concat())
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
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Color at (col, row).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the raster.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Rgb {
        assert!(col < self.width && row < self.height, "pixel out of bounds");
        self.pixels[row * self.width + col]
    }

    /// Packed `RGBRGB...` bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}
