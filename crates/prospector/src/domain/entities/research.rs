//! AccountResearchOutput - Result of an account analysis

use serde::{Deserialize, Serialize};

/// Account research produced fresh per analysis call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResearchOutput {
    pub account_id: String,
    pub summary: String,
    pub key_insights: Vec<String>,
    pub pain_points: Vec<String>,
    pub buying_indicators: Vec<String>,
    pub recommended_approach: String,
    pub next_steps: Vec<String>,
}

impl AccountResearchOutput {
    /// Degraded research: the whole response becomes the summary
    pub fn from_raw_text(account_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            summary: text.into(),
            ..Default::default()
        }
    }
}
