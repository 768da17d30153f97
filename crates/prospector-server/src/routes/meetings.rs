//! Meeting Routes - Transcript processing

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use prospector::application::prompts;
use prospector::Account;

use super::ApiError;
use crate::models::{
    ErrorResponse, MeetingInsightResponse, MeetingNotesResponse, ProcessMeetingRequest,
};
use crate::AppState;

/// Summarize a meeting transcript
#[utoipa::path(
    post,
    path = "/api/meetings/process",
    request_body = ProcessMeetingRequest,
    responses(
        (status = 200, description = "Meeting insight", body = MeetingInsightResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Model gateway failure", body = ErrorResponse)
    ),
    tag = "Meetings"
)]
pub async fn process_transcript(
    State(state): State<AppState>,
    Json(payload): Json<ProcessMeetingRequest>,
) -> Result<Json<MeetingInsightResponse>, ApiError> {
    let account = payload.account.map(Account::from);

    // Explicit context wins; otherwise describe the attached account
    let account_context = payload
        .account_context
        .or_else(|| account.as_ref().map(prompts::account_facts));
    let account_id = payload
        .account_id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| account.as_ref().map(|account| account.id.clone()))
        .filter(|id| !id.trim().is_empty());

    let insight = state
        .intelligence
        .process_meeting_transcript(
            payload.transcript.as_deref(),
            account_id.as_deref(),
            account_context.as_deref(),
        )
        .await?;

    Ok(Json(insight.into()))
}

/// List processed meeting notes for an account
#[utoipa::path(
    get,
    path = "/api/meetings/{account_id}",
    params(
        ("account_id" = String, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Meeting notes (none until storage is wired)", body = MeetingNotesResponse)
    ),
    tag = "Meetings"
)]
pub async fn list_notes(Path(account_id): Path<String>) -> Json<MeetingNotesResponse> {
    Json(MeetingNotesResponse {
        account_id,
        notes: vec![],
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/meetings/process", post(process_transcript))
        .route("/api/meetings/:account_id", get(list_notes))
}
