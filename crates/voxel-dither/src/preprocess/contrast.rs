//! Contrast boost around the image's mean luma.

use crate::color::Rgb;
use crate::raster::Raster;

/// Contrast factor applied to decoded images by default.
pub const DEFAULT_CONTRAST: f32 = 1.2;

/// ITU-R 601 luma in 16.16 fixed point, rounded.
#[inline]
fn luma(p: Rgb) -> u32 {
    (p.r as u32 * 19595 + p.g as u32 * 38470 + p.b as u32 * 7471 + 0x8000) >> 16
}

/// Mean luma of a raster, rounded to the nearest integer.
///
/// Returns 0 for an empty raster.
pub fn mean_luma(raster: &Raster) -> u8 {
    let pixels = raster.pixels();
    if pixels.is_empty() {
        return 0;
    }
    let sum: u64 = pixels.iter().map(|&p| luma(p) as u64).sum();
    let mean = sum as f64 / pixels.len() as f64;
    (mean + 0.5) as u8
}

/// Scale every channel away from the mean luma by `factor`.
///
/// `out = mean + factor * (in - mean)`, truncated toward zero and clamped
/// to `0..=255`. A factor of 1.0 returns an identical raster; 0.0 returns a
/// flat gray of the mean luma.
///
/// # Example
///
/// ```
/// use voxel_dither::{adjust_contrast, Raster, Rgb};
///
/// let raster = Raster::filled(2, 2, Rgb::new(90, 90, 90));
/// // A flat image has nothing to stretch.
/// assert_eq!(adjust_contrast(&raster, 1.2), raster);
/// ```
pub fn adjust_contrast(raster: &Raster, factor: f32) -> Raster {
    let mean = mean_luma(raster) as f32;
    let stretch = |v: u8| -> u8 {
        let out = mean + factor * (v as f32 - mean);
        if out <= 0.0 {
            0
        } else if out >= 255.0 {
            255
        } else {
            out as u8
        }
    };

    let pixels = raster
        .pixels()
        .iter()
        .map(|&p| Rgb::new(stretch(p.r), stretch(p.g), stretch(p.b)))
        .collect();

    Raster::new(raster.width(), raster.height(), pixels)
        .unwrap_or_else(|| unreachable!("pixel count is preserved"))
}
