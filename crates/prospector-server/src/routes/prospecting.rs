//! Prospecting Routes - Outreach drafting

use axum::{extract::State, routing::post, Json, Router};
use prospector::{Account, Contact};

use super::ApiError;
use crate::models::{
    ErrorResponse, GenerateMessageRequest, OutreachMessageResponse, TemplatesRequest,
    TemplatesResponse,
};
use crate::AppState;

/// Draft an outreach message for a contact
#[utoipa::path(
    post,
    path = "/api/prospecting/generate-message",
    request_body = GenerateMessageRequest,
    responses(
        (status = 200, description = "Generated message", body = OutreachMessageResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Model gateway failure", body = ErrorResponse)
    ),
    tag = "Prospecting"
)]
pub async fn generate_message(
    State(state): State<AppState>,
    Json(payload): Json<GenerateMessageRequest>,
) -> Result<Json<OutreachMessageResponse>, ApiError> {
    let contact = payload.contact.map(Contact::from);
    let account = payload.account.map(Account::from);

    let message = state
        .intelligence
        .generate_outreach_message(
            contact.as_ref(),
            account.as_ref(),
            payload.context.as_deref(),
            payload.message_type.as_deref(),
        )
        .await?;

    Ok(Json(message.into()))
}

/// List message templates
#[utoipa::path(
    post,
    path = "/api/prospecting/templates",
    request_body = TemplatesRequest,
    responses(
        (status = 200, description = "Templates (none until storage is wired)", body = TemplatesResponse)
    ),
    tag = "Prospecting"
)]
pub async fn list_templates(Json(payload): Json<TemplatesRequest>) -> Json<TemplatesResponse> {
    tracing::debug!("Template lookup: message_type={:?}", payload.message_type);
    Json(TemplatesResponse { templates: vec![] })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/prospecting/generate-message", post(generate_message))
        .route("/api/prospecting/templates", post(list_templates))
}
