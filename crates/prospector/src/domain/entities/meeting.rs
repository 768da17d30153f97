//! MeetingInsight - Summary extracted from a meeting transcript

use serde::{Deserialize, Serialize};

/// Sentiment used when the model does not provide one
pub const DEFAULT_MEETING_SENTIMENT: &str = "neutral";

/// Insight derived from a transcript plus account context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInsight {
    /// Caller supplied account, never taken from model output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub summary: String,
    pub action_items: Vec<String>,
    pub next_steps: Vec<String>,
    pub sentiment: String,
}

impl MeetingInsight {
    /// Degraded insight: the whole response becomes the summary
    pub fn from_raw_text(account_id: Option<String>, text: impl Into<String>) -> Self {
        Self {
            account_id,
            summary: text.into(),
            action_items: Vec::new(),
            next_steps: Vec::new(),
            sentiment: DEFAULT_MEETING_SENTIMENT.to_string(),
        }
    }
}
