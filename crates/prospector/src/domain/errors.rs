//! Domain Errors
//!
//! Error types for the orchestration operations.
//!
//! Validators and the gateway produce their own narrow errors. Each operation
//! wraps whichever one occurred into a single [`OperationError`] that keeps the
//! underlying error type as data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::{MessageType, Operation};

/// Type name carried by every validation failure
pub const INVALID_INPUT: &str = "InvalidInput";

/// Type name carried by empty gateway payloads
pub const EMPTY_RESPONSE: &str = "EmptyResponse";

/// Precondition failures, raised before any gateway call
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid account data: account is required")]
    MissingAccount,

    #[error("Invalid account data: companyName is required")]
    MissingCompanyName,

    #[error("Invalid contact data: contact is required")]
    MissingContact,

    #[error("Invalid contact data: firstName and lastName are required")]
    MissingContactName,

    #[error("Invalid message type: messageType is required")]
    MissingMessageType,

    #[error("Invalid message type: {0}. Must be one of: {}", supported_message_types())]
    UnsupportedMessageType(String),

    #[error("Invalid transcript: transcript cannot be empty")]
    EmptyTranscript,

    #[error("Invalid objectives: objectives cannot be empty")]
    MissingObjectives,
}

fn supported_message_types() -> String {
    MessageType::ALL
        .iter()
        .map(MessageType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures of a single gateway round trip
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport succeeded but no usable text came back
    #[error("Provider response did not contain text content")]
    EmptyResponse,

    /// Provider reported an error (type preserved verbatim)
    #[error("{error_type}: {message}")]
    Provider { error_type: String, message: String },

    /// Request never produced a provider response
    #[error("{error_type}: {message}")]
    Transport { error_type: String, message: String },
}

impl GatewayError {
    pub fn provider(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    pub fn transport(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    /// Upstream error type name
    pub fn error_type(&self) -> &str {
        match self {
            GatewayError::EmptyResponse => EMPTY_RESPONSE,
            GatewayError::Provider { error_type, .. }
            | GatewayError::Transport { error_type, .. } => error_type,
        }
    }

    /// Upstream message without the type prefix
    pub fn message(&self) -> String {
        match self {
            GatewayError::EmptyResponse => self.to_string(),
            GatewayError::Provider { message, .. }
            | GatewayError::Transport { message, .. } => message.clone(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::EmptyResponse => ErrorKind::EmptyResponse,
            GatewayError::Provider { .. } | GatewayError::Transport { .. } => ErrorKind::Gateway,
        }
    }
}

/// Coarse classification callers branch on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Precondition failed; the gateway was never called
    InvalidInput,
    /// Gateway answered without usable text
    EmptyResponse,
    /// Transport or provider failure
    Gateway,
}

/// Enriched error raised by every operation
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("Failed to {operation} for {subject}: {error_type} - {message}")]
pub struct OperationError {
    pub operation: Operation,
    /// Account/contact id or company name the call was about
    pub subject: String,
    pub kind: ErrorKind,
    /// Underlying error type name (e.g. `InvalidInput`, `rate_limit_error`)
    pub error_type: String,
    pub message: String,
}

impl OperationError {
    pub fn invalid_input(
        operation: Operation,
        subject: impl Into<String>,
        error: &ValidationError,
    ) -> Self {
        Self {
            operation,
            subject: subject.into(),
            kind: ErrorKind::InvalidInput,
            error_type: INVALID_INPUT.to_string(),
            message: error.to_string(),
        }
    }

    pub fn gateway(operation: Operation, subject: impl Into<String>, error: &GatewayError) -> Self {
        Self {
            operation,
            subject: subject.into(),
            kind: error.kind(),
            error_type: error.error_type().to_string(),
            message: error.message(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        self.kind == ErrorKind::InvalidInput
    }
}
