//! Account research payloads

use prospector::AccountResearchOutput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AccountDto, ContactDto};

/// Analyze account request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeAccountRequest {
    /// Used when the account payload carries no id
    pub account_id: Option<String>,
    pub account: Option<AccountDto>,
    pub contacts: Option<Vec<ContactDto>>,
}

/// Account research result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResponse {
    pub account_id: String,
    pub summary: String,
    pub key_insights: Vec<String>,
    pub pain_points: Vec<String>,
    pub buying_indicators: Vec<String>,
    pub recommended_approach: String,
    pub next_steps: Vec<String>,
}

impl From<AccountResearchOutput> for ResearchResponse {
    fn from(output: AccountResearchOutput) -> Self {
        Self {
            account_id: output.account_id,
            summary: output.summary,
            key_insights: output.key_insights,
            pain_points: output.pain_points,
            buying_indicators: output.buying_indicators,
            recommended_approach: output.recommended_approach,
            next_steps: output.next_steps,
        }
    }
}

/// Stored research lookup (storage is not wired yet)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredResearchResponse {
    pub account_id: String,
    pub research: Option<ResearchResponse>,
}
