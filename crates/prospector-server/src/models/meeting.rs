//! Meeting transcript payloads

use prospector::MeetingInsight;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AccountDto;

/// Process meeting transcript request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMeetingRequest {
    pub transcript: Option<String>,
    pub account_id: Option<String>,
    /// Free-text context; rendered from `account` when omitted
    pub account_context: Option<String>,
    pub account: Option<AccountDto>,
}

/// Meeting insight
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInsightResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub summary: String,
    pub action_items: Vec<String>,
    pub next_steps: Vec<String>,
    pub sentiment: String,
}

impl From<MeetingInsight> for MeetingInsightResponse {
    fn from(insight: MeetingInsight) -> Self {
        Self {
            account_id: insight.account_id,
            summary: insight.summary,
            action_items: insight.action_items,
            next_steps: insight.next_steps,
            sentiment: insight.sentiment,
        }
    }
}

/// Meeting notes lookup (storage is not wired yet)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingNotesResponse {
    pub account_id: String,
    pub notes: Vec<MeetingInsightResponse>,
}
