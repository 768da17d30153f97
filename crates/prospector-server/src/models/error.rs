//! Error envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"error": {...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    /// INVALID_INPUT | EMPTY_RESPONSE | GATEWAY_ERROR
    pub code: String,
    pub details: ErrorDetails,
}

/// Enriched error data for clients
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetails {
    pub operation: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}
