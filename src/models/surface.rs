use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer world coordinate of one block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Cardinal direction a surface is built along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    North,
    South,
    East,
    West,
}

impl Facing {
    /// Parse a facing name, case-insensitively.
    ///
    /// Anything that is not one of the four cardinal names maps to `North`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "north" => Facing::North,
            "south" => Facing::South,
            "east" => Facing::East,
            "west" => Facing::West,
            other => {
                tracing::warn!(facing = other, "Unknown facing, using north");
                Facing::North
            }
        }
    }

    /// Cardinal facing for a player yaw in degrees.
    ///
    /// Yaw 0 looks toward +Z (south), 90 toward -X (west), 180 toward -Z
    /// (north) and 270 toward +X (east).
    pub fn from_yaw(yaw: f32) -> Self {
        let yaw = yaw.rem_euclid(360.0);
        if !(45.0..315.0).contains(&yaw) {
            Facing::South
        } else if yaw < 135.0 {
            Facing::West
        } else if yaw < 225.0 {
            Facing::North
        } else {
            Facing::East
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::South => "south",
            Facing::East => "east",
            Facing::West => "west",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key of a renderable surface.
///
/// Two renders with equal identities are diffed against each other;
/// different identities never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceIdentity {
    /// World position of image column 0 on the bottom row
    pub origin: BlockPos,
    pub facing: Facing,
    pub width: u32,
    pub height: u32,
}

impl SurfaceIdentity {
    pub fn new(origin: BlockPos, facing: Facing, width: u32, height: u32) -> Self {
        Self {
            origin,
            facing,
            width,
            height,
        }
    }

    /// Number of blocks the surface covers
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for SurfaceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} facing {} at ({})",
            self.width, self.height, self.facing, self.origin
        )
    }
}
