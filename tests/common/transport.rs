//! In-process transport doubles.

use std::sync::Mutex;

use blockwall::error::TransportError;
use blockwall::services::{CommandResponse, Transport};

/// Records every command and answers with a success message
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    /// Only the `fill` commands received so far
    pub fn fills(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|c| c.starts_with("fill "))
            .collect()
    }

    pub fn reset(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl Transport for RecordingTransport {
    fn send_command(&self, command: &str) -> Result<CommandResponse, TransportError> {
        self.sent.lock().unwrap().push(command.to_string());
        Ok(CommandResponse::new(vec!["1".to_string()]))
    }
}

/// Accepts a fixed number of commands, then fails every call
pub struct FailingTransport {
    accept: usize,
    sent: Mutex<Vec<String>>,
}

impl FailingTransport {
    pub fn after(accept: usize) -> Self {
        Self {
            accept,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for FailingTransport {
    fn send_command(&self, command: &str) -> Result<CommandResponse, TransportError> {
        let mut sent = self.sent.lock().unwrap();
        if sent.len() >= self.accept {
            return Err(TransportError::Unavailable("connection reset".to_string()));
        }
        sent.push(command.to_string());
        Ok(CommandResponse::default())
    }
}

/// Applies every command, but loses the reply for commands containing
/// `marker` (a timeout after the server already acted)
pub struct LostReplyTransport {
    marker: &'static str,
    sent: Mutex<Vec<String>>,
}

impl LostReplyTransport {
    pub fn on(marker: &'static str) -> Self {
        Self {
            marker,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for LostReplyTransport {
    fn send_command(&self, command: &str) -> Result<CommandResponse, TransportError> {
        self.sent.lock().unwrap().push(command.to_string());
        if command.contains(self.marker) {
            return Err(TransportError::Unavailable("reply timed out".to_string()));
        }
        Ok(CommandResponse::default())
    }
}
