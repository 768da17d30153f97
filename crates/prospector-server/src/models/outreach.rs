//! Outreach message payloads

use chrono::{DateTime, Utc};
use prospector::{MessageType, OutreachMessage};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AccountDto, ContactDto};

/// Generate outreach message request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    pub contact: Option<ContactDto>,
    pub account: Option<AccountDto>,
    /// Account background and previous interactions
    pub context: Option<String>,
    /// email | phone | linkedin
    pub message_type: Option<String>,
}

/// Generated outreach message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutreachMessageResponse {
    pub id: String,
    pub contact_id: String,
    #[schema(value_type = String, example = "email")]
    pub message_type: MessageType,
    pub content: String,
    pub sentiment: String,
    pub generated_at: DateTime<Utc>,
    pub customized: bool,
}

impl From<OutreachMessage> for OutreachMessageResponse {
    fn from(message: OutreachMessage) -> Self {
        Self {
            id: message.id,
            contact_id: message.contact_id,
            message_type: message.message_type,
            content: message.content,
            sentiment: message.sentiment,
            generated_at: message.generated_at,
            customized: message.customized,
        }
    }
}

/// Templates lookup request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesRequest {
    pub message_type: Option<String>,
}

/// Message template
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDto {
    pub id: String,
    pub message_type: String,
    pub name: String,
    pub template: String,
    pub variables: Vec<String>,
}

/// Templates list (storage is not wired yet)
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateDto>,
}
