//! Account plan payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{AccountDto, ContactDto};

/// Create account plan request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub account: Option<AccountDto>,
    pub contacts: Option<Vec<ContactDto>>,
    pub objectives: Option<String>,
}

/// Generated account plan
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountPlanResponse {
    pub account_id: String,
    /// Markdown document
    pub content: String,
    pub generated_at: DateTime<Utc>,
}
