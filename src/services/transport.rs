//! The seam between the compiler and the world it writes to.

use serde_json::json;

use crate::error::TransportError;
use crate::models::{qualify_block, BlockPos, FillCommand};

/// Prefix shown in front of in-game announcements
pub const CHAT_PREFIX: &str = "[blockwall] ";

/// Messages returned by the remote side for one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    pub messages: Vec<String>,
}

impl CommandResponse {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// First message, if the server returned any
    pub fn first(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Executes world commands on a remote server.
///
/// Only [`Transport::send_command`] must be implemented; the helpers build
/// their command text on top of it. Calls block until the remote side has
/// answered, so commands are applied in issue order.
pub trait Transport: Send + Sync {
    /// Run one raw command
    fn send_command(&self, command: &str) -> Result<CommandResponse, TransportError>;

    /// Fill an inclusive box with one block
    fn fill(&self, command: &FillCommand) -> Result<CommandResponse, TransportError> {
        self.send_command(&command.to_command_string())
    }

    /// Place a single block
    fn set_block(&self, pos: BlockPos, block: &str) -> Result<CommandResponse, TransportError> {
        self.send_command(&format!("setblock {} {}", pos, qualify_block(block)))
    }

    /// Broadcast a chat line to every player
    fn tellraw(&self, message: &str, color: &str) -> Result<CommandResponse, TransportError> {
        self.send_command(&format!("tellraw @a {}", chat_component(message, color)))
    }
}

/// JSON text component for a prefixed chat line
pub fn chat_component(message: &str, color: &str) -> String {
    json!([
        "",
        { "text": CHAT_PREFIX, "color": "aqua", "bold": true },
        { "text": message, "color": color },
    ])
    .to_string()
}
