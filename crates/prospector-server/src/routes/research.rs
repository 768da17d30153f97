//! Research Routes - Account analysis

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use prospector::Account;

use super::ApiError;
use crate::models::{
    contacts_from, AnalyzeAccountRequest, ErrorResponse, ResearchResponse, StoredResearchResponse,
};
use crate::AppState;

/// Analyze an account and its key contacts
#[utoipa::path(
    post,
    path = "/api/research/analyze",
    request_body = AnalyzeAccountRequest,
    responses(
        (status = 200, description = "Account research", body = ResearchResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Model gateway failure", body = ErrorResponse)
    ),
    tag = "Research"
)]
pub async fn analyze_account(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeAccountRequest>,
) -> Result<Json<ResearchResponse>, ApiError> {
    let account = payload.account.map(|dto| {
        let mut account = Account::from(dto);
        if account.id.trim().is_empty() {
            if let Some(id) = payload.account_id {
                account.id = id;
            }
        }
        account
    });
    let contacts = contacts_from(payload.contacts);

    let research = state
        .intelligence
        .analyze_account(account.as_ref(), &contacts)
        .await?;

    Ok(Json(research.into()))
}

/// Look up stored research for an account
#[utoipa::path(
    get,
    path = "/api/research/{account_id}",
    params(
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Stored research (none until storage is wired)", body = StoredResearchResponse)
    ),
    tag = "Research"
)]
pub async fn get_research(Path(account_id): Path<String>) -> Json<StoredResearchResponse> {
    Json(StoredResearchResponse {
        account_id,
        research: None,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/research/analyze", post(analyze_account))
        .route("/api/research/:account_id", get(get_research))
}
