//! API error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use landkit_core::ValidationError;
use landkit_out::RenderError;
use serde_json::json;

/// Request-level failure mapped onto a JSON error body
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, not JSON, or sent without a JSON content type
    MalformedBody(JsonRejection),
    /// Required top-level request field absent or null
    MissingField(&'static str),
    Validation {
        status: StatusCode,
        error: &'static str,
        issues: ValidationError,
    },
    Render(RenderError),
}

impl ApiError {
    pub fn invalid_campaign(issues: ValidationError) -> Self {
        Self::Validation { status: StatusCode::BAD_REQUEST, error: "Invalid campaign data", issues }
    }

    /// Campaign rejected on the transform route
    pub fn unprocessable_campaign(issues: ValidationError) -> Self {
        Self::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: "Campaign validation failed",
            issues,
        }
    }

    pub fn invalid_schema(issues: ValidationError) -> Self {
        Self::Validation { status: StatusCode::BAD_REQUEST, error: "Invalid internal schema data", issues }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedBody(rejection) => (
                rejection.status(),
                Json(json!({ "error": "Invalid request body", "details": rejection.body_text() })),
            )
                .into_response(),
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("{} is required", field) })),
            )
                .into_response(),
            Self::Validation { status, error, issues } => {
                (status, Json(json!({ "error": error, "validationErrors": issues }))).into_response()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Rendering failed", "details": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
