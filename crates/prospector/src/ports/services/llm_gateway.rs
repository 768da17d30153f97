//! LLM Gateway Port
//!
//! Abstract interface for language-model invocations. Operations receive a
//! gateway explicitly, so the provider can be swapped (Anthropic in production,
//! fakes in tests) without ambient state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::GatewayError;

/// Discriminator of a text content block
pub const TEXT_BLOCK: &str = "text";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// One element of a provider response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Block discriminator, `text` for plain text
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: TEXT_BLOCK.to_string(),
            text: Some(text.into()),
        }
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub input_tokens: u32,
    /// Tokens in the completion
    pub output_tokens: u32,
}

/// Response from one gateway round trip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: Vec<ContentBlock>,
    /// Model that generated the response
    pub model: String,
    pub usage: TokenUsage,
    pub stop_reason: Option<String>,
}

impl CompletionResponse {
    /// Response holding a single text block
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            ..Default::default()
        }
    }

    /// Text of the first block.
    ///
    /// Only the first block is consulted; it must be a text block with
    /// non-blank text, anything else counts as an empty response.
    pub fn first_text(&self) -> Option<&str> {
        let block = self.content.first()?;
        if block.kind != TEXT_BLOCK {
            return None;
        }
        block
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// LLM Gateway interface
///
/// Exactly one provider round trip per `complete` call. Implementations must
/// not retry, and must surface the provider's error type and message
/// unmodified.
///
/// # Example
///
/// ```rust,ignore
/// use prospector::ports::LlmGateway;
///
/// struct AnthropicGateway { /* reqwest client */ }
///
/// #[async_trait]
/// impl LlmGateway for AnthropicGateway {
///     async fn complete(&self, messages: &[ChatMessage], max_tokens: u32)
///         -> Result<CompletionResponse, GatewayError> {
///         // POST /v1/messages
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send messages with a token budget and return the raw provider response
    async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<CompletionResponse, GatewayError>;

    /// Send a single user prompt and return its text.
    ///
    /// An empty block list, a non-text first block or blank text is
    /// reported as [`GatewayError::EmptyResponse`].
    async fn complete_text(&self, prompt: &str, max_tokens: u32) -> Result<String, GatewayError> {
        let messages = vec![ChatMessage::user(prompt)];
        let response = self.complete(&messages, max_tokens).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or(GatewayError::EmptyResponse)
    }

    /// Get the provider name (e.g., "anthropic")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
