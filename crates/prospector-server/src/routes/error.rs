//! Error envelope for failed operations

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prospector::{ErrorKind, OperationError};

use crate::models::{ErrorBody, ErrorDetails, ErrorResponse};

/// Enriched operation failure rendered as `{"error": {...}}`
#[derive(Debug)]
pub struct ApiError(pub OperationError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::EmptyResponse | ErrorKind::Gateway => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.0.kind {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::EmptyResponse => "EMPTY_RESPONSE",
            ErrorKind::Gateway => "GATEWAY_ERROR",
        }
    }
}

impl From<OperationError> for ApiError {
    fn from(err: OperationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();
        let summary = self.0.to_string();
        let OperationError {
            operation,
            subject,
            error_type,
            message,
            ..
        } = self.0;

        let body = ErrorResponse {
            error: ErrorBody {
                message: summary,
                code,
                details: ErrorDetails {
                    operation: operation.to_string(),
                    subject,
                    error_type,
                    message,
                },
            },
        };

        (status, Json(body)).into_response()
    }
}
