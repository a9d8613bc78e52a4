//! Flat-region detection for the diffusion fast path.

use crate::raster::Raster;

/// Whether every pixel in the 3x3 neighborhood of (x, y) stays within
/// `threshold` of the center on every channel.
///
/// The neighborhood is clamped at raster edges: out-of-bounds neighbors are
/// simply not considered. Always reads the untouched source raster.
pub fn is_uniform_region(source: &Raster, x: usize, y: usize, threshold: u8) -> bool {
    let center = source.get(x, y);
    let x_lo = x.saturating_sub(1);
    let y_lo = y.saturating_sub(1);
    let x_hi = (x + 1).min(source.width() - 1);
    let y_hi = (y + 1).min(source.height() - 1);

    for ny in y_lo..=y_hi {
        for nx in x_lo..=x_hi {
            if source.get(nx, ny).max_channel_diff(center) > threshold {
                return false;
            }
        }
    }
    true
}
