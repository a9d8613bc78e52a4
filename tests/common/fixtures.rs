//! Test fixtures and constants.

use blockwall::models::{BlockPos, Facing, SurfaceIdentity};
use blockwall::services::RenderOptions;
use voxel_dither::{DitherOptions, Raster, Rgb};

/// Source colours that map exactly onto palette entries without dithering
pub mod colors {
    use voxel_dither::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const LIME: Rgb = Rgb::new(0, 255, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// A 4x1 north-facing surface at (0, 64, 0)
pub fn strip_identity() -> SurfaceIdentity {
    SurfaceIdentity::new(BlockPos::new(0, 64, 0), Facing::North, 4, 1)
}

pub fn identity(facing: Facing, width: u32, height: u32) -> SurfaceIdentity {
    SurfaceIdentity::new(BlockPos::new(100, 70, -20), facing, width, height)
}

/// Row of `[red, red, blue, blue]`
pub fn red_blue_strip() -> Raster {
    use colors::*;
    Raster::from_rows(&[vec![RED, RED, BLUE, BLUE]]).unwrap()
}

/// Nearest-colour rendering with smart diff on
pub fn nearest_options() -> RenderOptions {
    RenderOptions {
        dither: DitherOptions::new().dithering(false),
        ..RenderOptions::default()
    }
}

/// Left half one colour, right half another
pub fn split_raster(width: usize, height: usize, left: Rgb, right: Rgb) -> Raster {
    let rows: Vec<Vec<Rgb>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|x| if x < width / 2 { left } else { right })
                .collect()
        })
        .collect();
    Raster::from_rows(&rows).unwrap()
}
