use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only two kinds of failure reach the caller: validation failures (400, with a
/// field-specific message) and processing failures (500, with a short message
/// plus a details string). LLM output that fails to parse as JSON is NOT an
/// error — the feature fallback absorbs it and the caller still gets 200.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{context}: {details}")]
    Llm { context: String, details: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Llm { context, details } => {
                tracing::error!("LLM error: {context}: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": context, "details": details })),
                )
                    .into_response()
            }
        }
    }
}
