//! OutreachMessage - Drafted outreach copy for a contact

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::MessageType;

/// Sentiment label attached to every generated message
pub const OUTREACH_SENTIMENT: &str = "professional";

/// OutreachMessage - generated content plus locally synthesized identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachMessage {
    pub id: String,
    pub contact_id: String,
    pub message_type: MessageType,
    pub content: String,
    pub sentiment: String,
    pub generated_at: DateTime<Utc>,
    /// Marks the message as personalized for the contact
    pub customized: bool,
}

impl OutreachMessage {
    /// Create a new message with generated ID and timestamp
    pub fn new(contact_id: impl Into<String>, message_type: MessageType, content: String) -> Self {
        Self {
            id: format!("msg_{}", Uuid::new_v4().simple()),
            contact_id: contact_id.into(),
            message_type,
            content,
            sentiment: OUTREACH_SENTIMENT.to_string(),
            generated_at: Utc::now(),
            customized: true,
        }
    }
}
