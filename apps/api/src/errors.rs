use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pipeline::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", .0.body_text())]
    Rejected(#[from] JsonRejection),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected(rejection) => rejection.status(),
            AppError::Pipeline(e) => {
                tracing::error!("Pipeline error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
