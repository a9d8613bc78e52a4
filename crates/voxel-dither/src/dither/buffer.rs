//! Owned working buffer for error diffusion.

use super::kernel::Kernel;
use crate::raster::Raster;

/// Full-size fractional copy of the source raster.
///
/// Error from visited pixels accumulates here; the source raster itself is
/// never touched, so flat-region checks always see the original image.
#[derive(Debug)]
pub struct WorkBuffer {
    values: Vec<[f32; 3]>,
    width: usize,
    height: usize,
}

impl WorkBuffer {
    pub fn from_raster(source: &Raster) -> Self {
        Self {
            values: source.pixels().iter().map(|p| p.to_f32()).collect(),
            width: source.width(),
            height: source.height(),
        }
    }

    /// Current value at (x, y), including received error.
    ///
    /// Not clamped: error that pushed a channel past 0 or 255 is carried
    /// on to the neighbors.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> [f32; 3] {
        self.values[y * self.width + x]
    }

    /// Spread `error` from (x, y) to its unvisited neighbors.
    ///
    /// Neighbors outside the raster are skipped; their share is dropped.
    pub fn diffuse(&mut self, x: usize, y: usize, error: [f32; 3], kernel: &Kernel) {
        let divisor = kernel.divisor as f32;
        for &(dx, dy, weight) in kernel.entries {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx < 0 || ny < 0 || nx >= self.width as i64 || ny >= self.height as i64 {
                continue;
            }
            let factor = weight as f32 / divisor;
            let cell = &mut self.values[ny as usize * self.width + nx as usize];
            for c in 0..3 {
                cell[c] += error[c] * factor;
            }
        }
    }
}
