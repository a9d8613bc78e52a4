//! Mock GDMC HTTP interface.

use wiremock::{
    matchers::{body_string, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Wrapper around wiremock MockServer with GDMC endpoints
pub struct MockGdmcServer {
    pub server: MockServer,
}

impl MockGdmcServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to hand to the transport
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Accept every command with the given message
    pub async fn mock_command_ok(&self, message: &str) {
        Mock::given(method("POST"))
            .and(path("/command"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{ "status": 1, "message": message }])),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer one specific command body
    pub async fn mock_command(&self, command: &str, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/command"))
            .and(body_string(command))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Reject every command with a status code
    pub async fn mock_command_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/command"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Bodies of all commands received so far
    pub async fn received_commands(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }
}
