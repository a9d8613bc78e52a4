use serde::{Deserialize, Serialize};
use std::fmt;

use super::BlockPos;

/// Namespace prepended to bare block identifiers
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// One remote region fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillCommand {
    pub from: BlockPos,
    pub to: BlockPos,
    /// Block identifier, usually without namespace
    pub block: String,
}

impl FillCommand {
    pub fn new(from: BlockPos, to: BlockPos, block: impl Into<String>) -> Self {
        Self {
            from,
            to,
            block: block.into(),
        }
    }

    /// Server command text, e.g. `fill 0 64 0 3 64 0 minecraft:red_concrete`
    pub fn to_command_string(&self) -> String {
        format!(
            "fill {} {} {}",
            self.from,
            self.to,
            qualify_block(&self.block)
        )
    }
}

impl fmt::Display for FillCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})-({}) {}", self.from, self.to, self.block)
    }
}

/// Add the default namespace unless the identifier already has one.
pub fn qualify_block(block: &str) -> String {
    if block.contains(':') {
        block.to_string()
    } else {
        format!("{DEFAULT_NAMESPACE}:{block}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_string() {
        let cmd = FillCommand::new(BlockPos::new(0, 64, 0), BlockPos::new(3, 64, -2), "red_concrete");
        assert_eq!(
            cmd.to_command_string(),
            "fill 0 64 0 3 64 -2 minecraft:red_concrete"
        );
    }

    #[test]
    fn test_qualify_block() {
        assert_eq!(qualify_block("air"), "minecraft:air");
        assert_eq!(qualify_block("minecraft:air"), "minecraft:air");
        assert_eq!(qualify_block("mymod:glow"), "mymod:glow");
    }
}
