//! Where the nearest player stands and looks.
//!
//! The server answers `data get entity @p Pos` with something like
//! `Steve has the following entity data: [159.81d, 136.47d, 320.27d]` and
//! `data get entity @p Rotation` with `... [12.5f, -3.0f]`.

use regex::Regex;
use std::sync::LazyLock;

use super::transport::Transport;
use crate::error::TransportError;
use crate::models::{BlockPos, Facing};

const POSITION_COMMAND: &str = "data get entity @p Pos";
const ROTATION_COMMAND: &str = "data get entity @p Rotation";

/// Trailing `[...]` list of an entity data response
static LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\s*$").expect("list pattern"));

/// One numeric item, with an optional NBT type suffix
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)[dDfF]?").expect("number pattern")
});

/// Position and orientation of a player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerInfo {
    pub position: BlockPos,
    pub yaw: f32,
    pub pitch: f32,
    /// Cardinal direction derived from `yaw`
    pub facing: Facing,
}

impl PlayerInfo {
    pub fn new(position: BlockPos, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            facing: Facing::from_yaw(yaw),
        }
    }
}

/// Numbers of the trailing `[...]` list in an entity data response
pub fn parse_number_list(response: &str) -> Option<Vec<f64>> {
    let inner = LIST.captures(response.trim())?.get(1)?.as_str();
    inner
        .split(',')
        .map(|item| {
            let caps = NUMBER.captures(item.trim())?;
            caps.get(1)?.as_str().parse().ok()
        })
        .collect()
}

/// Block position from a `Pos` response, truncating toward zero
pub fn parse_position(response: &str) -> Option<BlockPos> {
    match parse_number_list(response)?.as_slice() {
        [x, y, z] => Some(BlockPos::new(*x as i32, *y as i32, *z as i32)),
        _ => None,
    }
}

/// (yaw, pitch) from a `Rotation` response
pub fn parse_rotation(response: &str) -> Option<(f32, f32)> {
    match parse_number_list(response)?.as_slice() {
        [yaw, pitch] => Some((*yaw as f32, *pitch as f32)),
        _ => None,
    }
}

/// Query the nearest player.
///
/// Returns `Ok(None)` when the server answered but no player data could be
/// read from it, e.g. because nobody is online.
pub fn fetch_player_info(transport: &dyn Transport) -> Result<Option<PlayerInfo>, TransportError> {
    let response = transport.send_command(POSITION_COMMAND)?;
    let Some(position) = response.first().and_then(parse_position) else {
        tracing::warn!(response = ?response.messages, "Could not read player position");
        return Ok(None);
    };

    let response = transport.send_command(ROTATION_COMMAND)?;
    let Some((yaw, pitch)) = response.first().and_then(parse_rotation) else {
        tracing::warn!(response = ?response.messages, "Could not read player rotation");
        return Ok(None);
    };

    Ok(Some(PlayerInfo::new(position, yaw, pitch)))
}
