//! Anthropic Gateway Implementation
//!
//! Sends completions to the Anthropic Messages API using reqwest.
//! One HTTP request per call; no retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use prospector::{
    ChatMessage, CompletionResponse, ContentBlock, GatewayError, LlmGateway, MessageRole,
    TokenUsage,
};

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Connection settings for the Anthropic API
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Per-request deadline; expiry surfaces as a `TimeoutError`
    pub request_timeout: Duration,
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

/// Anthropic implementation of LlmGateway
pub struct AnthropicGateway {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicGateway {
    pub fn new(config: AnthropicConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("prospector/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<CompletionResponse, GatewayError> {
        let request = MessagesRequest::new(&self.config.model, max_tokens, messages);

        let response = self
            .client
            .post(self.config.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }

        let payload: MessagesResponse = serde_json::from_str(&body)
            .map_err(|err| GatewayError::transport("DecodeError", err.to_string()))?;

        tracing::debug!(
            "Anthropic completion: model={}, input_tokens={}, output_tokens={}",
            payload.model,
            payload.usage.input_tokens,
            payload.usage.output_tokens
        );

        Ok(payload.into())
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<ApiMessage<'a>>,
}

impl<'a> MessagesRequest<'a> {
    /// System messages travel in the top-level `system` field
    fn new(model: &'a str, max_tokens: u32, messages: &'a [ChatMessage]) -> Self {
        let system = messages
            .iter()
            .filter(|m| m.role == MessageRole::System)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>();

        let turns = messages
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .map(|m| ApiMessage {
                role: m.role,
                content: &m.content,
            })
            .collect();

        Self {
            model,
            max_tokens,
            system: (!system.is_empty()).then(|| system.join("\n\n")),
            messages: turns,
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: MessageRole,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: TokenUsage,
}

impl From<MessagesResponse> for CompletionResponse {
    fn from(payload: MessagesResponse) -> Self {
        CompletionResponse {
            content: payload.content,
            model: payload.model,
            usage: payload.usage,
            stop_reason: payload.stop_reason,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

// ============================================
// Helper Functions
// ============================================

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    let error_type = if err.is_timeout() {
        "TimeoutError"
    } else if err.is_connect() {
        "ConnectionError"
    } else if err.is_decode() || err.is_body() {
        "DecodeError"
    } else {
        "RequestError"
    };
    GatewayError::transport(error_type, err.to_string())
}

/// Provider envelope `{"error": {"type", "message"}}`, else `http_<status>`
fn map_http_error(status: StatusCode, body: &str) -> GatewayError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => GatewayError::provider(envelope.error.kind, envelope.error.message),
        Err(_) => {
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.to_string()
            };
            GatewayError::provider(format!("http_{}", status.as_u16()), message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_request_moves_system_messages() {
        let messages = vec![
            ChatMessage::system("Be brief."),
            ChatMessage::user("Analyze Acme"),
        ];
        let request = MessagesRequest::new("model-x", 2000, &messages);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "model-x");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["system"], "Be brief.");
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Analyze Acme");
    }

    #[test]
    fn test_request_without_system_omits_field() {
        let messages = vec![ChatMessage::user("hi")];
        let json = serde_json::to_value(MessagesRequest::new("m", 10, &messages)).unwrap();
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_response_decoding() {
        let body = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-5-sonnet-20241022",
            "content": [{"type": "text", "text": "Subject: Hi\nBody: Hello"}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 120, "output_tokens": 14}
        }"#;
        let payload: MessagesResponse = serde_json::from_str(body).unwrap();
        let response = CompletionResponse::from(payload);

        assert_eq!(response.first_text(), Some("Subject: Hi\nBody: Hello"));
        assert_eq!(response.usage.output_tokens, 14);
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
    }

    #[test]
    fn test_tool_use_first_block_has_no_text() {
        let body = r#"{"model": "m", "content": [{"type": "tool_use", "id": "t1", "input": {}}]}"#;
        let payload: MessagesResponse = serde_json::from_str(body).unwrap();
        let response = CompletionResponse::from(payload);
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_map_http_error_provider_envelope() {
        let body =
            r#"{"type": "error", "error": {"type": "rate_limit_error", "message": "Slow down"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err, GatewayError::provider("rate_limit_error", "Slow down"));
    }

    #[test]
    fn test_map_http_error_unstructured_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.error_type(), "http_502");
        assert_eq!(err.message(), "Bad Gateway");

        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.message(), "<html>oops</html>");
    }

    fn gateway_at(base_url: &str, timeout: Duration) -> AnthropicGateway {
        let config = AnthropicConfig::new("sk-test")
            .with_base_url(base_url)
            .with_request_timeout(timeout);
        AnthropicGateway::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_silent_server_is_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let gateway = gateway_at(&format!("http://{}", addr), Duration::from_millis(200));
        let err = gateway.complete_text("hi", 10).await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport { .. }));
        assert_eq!(err.error_type(), "TimeoutError");
    }

    #[tokio::test]
    async fn test_refused_port_is_connection_error() {
        let gateway = gateway_at("http://127.0.0.1:1", Duration::from_secs(5));
        let err = gateway.complete_text("hi", 10).await.unwrap_err();
        assert_eq!(err.error_type(), "ConnectionError");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let body = "not json";
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let gateway = gateway_at(&format!("http://{}", addr), Duration::from_secs(5));
        let err = gateway.complete_text("hi", 10).await.unwrap_err();
        assert_eq!(err.error_type(), "DecodeError");
    }

    #[test]
    fn test_messages_url_trims_slash() {
        let config = AnthropicConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.messages_url(), "http://localhost:8080/v1/messages");
    }
}
