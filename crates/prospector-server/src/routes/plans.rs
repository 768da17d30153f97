//! Plan Routes - Account strategy plans

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use prospector::Account;

use super::ApiError;
use crate::models::{contacts_from, AccountPlanResponse, CreatePlanRequest, ErrorResponse};
use crate::AppState;

/// Write a strategic plan for an account
#[utoipa::path(
    post,
    path = "/api/plans",
    request_body = CreatePlanRequest,
    responses(
        (status = 200, description = "Markdown account plan", body = AccountPlanResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Model gateway failure", body = ErrorResponse)
    ),
    tag = "Plans"
)]
pub async fn create_plan(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<Json<AccountPlanResponse>, ApiError> {
    let account = payload.account.map(Account::from);
    let contacts = contacts_from(payload.contacts);

    let plan = state
        .intelligence
        .create_account_plan(account.as_ref(), &contacts, payload.objectives.as_deref())
        .await?;

    Ok(Json(AccountPlanResponse {
        account_id: account.map(|account| account.id).unwrap_or_default(),
        content: plan.into_inner(),
        generated_at: Utc::now(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/plans", post(create_plan))
}
