//! Mapping from image (column, row) to world coordinates.
//!
//! Image row 0 is the top of the surface; world Y grows upward, so the
//! bottom image row lands on the origin's Y. Columns run along a horizontal
//! axis chosen by the surface's facing:
//!
//! | facing | column `c` lands on        |
//! |--------|----------------------------|
//! | north  | `(ox + c, y, oz)`          |
//! | south  | `(ox - c, y, oz)`          |
//! | east   | `(ox, y, oz - c)`          |
//! | west   | `(ox, y, oz + c)`          |

use voxel_dither::QuantizedRaster;

use crate::models::{BlockAssignment, BlockPos, Facing, SurfaceIdentity};

/// Projects image coordinates of one surface into the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceProjector {
    origin: BlockPos,
    facing: Facing,
    width: u32,
    height: u32,
}

impl SurfaceProjector {
    pub fn new(identity: &SurfaceIdentity) -> Self {
        Self {
            origin: identity.origin,
            facing: identity.facing,
            width: identity.width,
            height: identity.height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World position of image pixel (col, row).
    pub fn project(&self, col: u32, row: u32) -> BlockPos {
        debug_assert!(col < self.width && row < self.height);
        let o = self.origin;
        let y = o.y + (self.height as i32 - 1 - row as i32);
        let c = col as i32;
        match self.facing {
            Facing::North => BlockPos::new(o.x + c, y, o.z),
            Facing::South => BlockPos::new(o.x - c, y, o.z),
            Facing::East => BlockPos::new(o.x, y, o.z - c),
            Facing::West => BlockPos::new(o.x, y, o.z + c),
        }
    }

    /// Opposite corners of the surface: top-left and bottom-right pixels.
    pub fn bounds(&self) -> (BlockPos, BlockPos) {
        (
            self.project(0, 0),
            self.project(self.width - 1, self.height - 1),
        )
    }

    /// Block assignment for every pixel of a quantized raster.
    ///
    /// The raster must have the projector's dimensions.
    pub fn assign(&self, quantized: &QuantizedRaster) -> BlockAssignment {
        debug_assert_eq!(quantized.width(), self.width as usize);
        debug_assert_eq!(quantized.height(), self.height as usize);

        let mut blocks = BlockAssignment::with_capacity(quantized.indices().len());
        for row in 0..self.height {
            for col in 0..self.width {
                let entry = quantized.entry_at(col as usize, row as usize);
                blocks.insert(self.project(col, row), entry.block);
            }
        }
        blocks
    }
}
