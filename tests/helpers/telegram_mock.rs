//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose API calls go to this mock server
    pub fn bot(&self) -> Bot {
        let url = url::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(url)
    }

    /// Answer every sendMessage call
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let (status, body) = if config.success {
            (
                200,
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 123,
                        "from": {
                            "id": 12345,
                            "is_bot": true,
                            "first_name": "IntakeBot",
                            "username": "intake_bot"
                        },
                        "chat": {
                            "id": test_user_id(),
                            "first_name": "Test",
                            "type": "private"
                        },
                        "date": 1714555800,
                        "text": "Test message"
                    }
                }),
            )
        } else {
            (
                400,
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: chat not found"
                }),
            )
        };

        let mut response = ResponseTemplate::new(status).set_body_json(body);
        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }
}

/// Get test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Get test user id (also the private chat id)
pub fn test_user_id() -> i64 {
    987654321
}
