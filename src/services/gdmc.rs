//! Transport over the GDMC HTTP interface.
//!
//! Commands are posted as plain text to `{base}/command`; the server answers
//! with a JSON array holding one `{status, message}` object per command line.

use serde::Deserialize;
use std::time::Duration;

use super::transport::{CommandResponse, Transport};
use crate::error::TransportError;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct CommandResult {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Blocking HTTP client for a GDMC-compatible server
pub struct GdmcTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl GdmcTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn command_url(&self) -> String {
        format!("{}/command", self.base_url)
    }
}

impl Transport for GdmcTransport {
    fn send_command(&self, command: &str) -> Result<CommandResponse, TransportError> {
        tracing::debug!(command, "Sending command");

        let response = self
            .client
            .post(self.command_url())
            .body(command.to_string())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(CommandResponse::new(parse_messages(&body)))
    }
}

/// Extract messages from a command response body.
///
/// Bodies that are not the expected JSON array are passed through as a
/// single message; empty bodies yield none.
fn parse_messages(body: &str) -> Vec<String> {
    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<CommandResult>>(body) {
        Ok(results) => results
            .into_iter()
            .filter_map(|r| match r.message? {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Err(_) => vec![body.to_string()],
    }
}
