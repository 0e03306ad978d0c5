use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::icebreaker::generator::{GenerationError, COMMUNICATION_MESSAGE, FORMAT_MESSAGE};
use crate::icebreaker::validation::FieldError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Communication error: {0}")]
    Communication(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        let message = err.user_message().to_string();
        match err {
            GenerationError::Validation(fields) => AppError::Validation { message, fields },
            GenerationError::Communication(e) => AppError::Communication(e.to_string()),
            GenerationError::Format { raw, source } => {
                AppError::Format(format!("{source} ({} bytes of model output)", raw.len()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation { message, fields } => {
                let body = Json(json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": message,
                        "fields": fields,
                    }
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Communication(detail) => {
                tracing::error!("Generation service error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMMUNICATION_ERROR",
                    COMMUNICATION_MESSAGE.to_string(),
                )
            }
            AppError::Format(detail) => {
                tracing::error!("Model output format error: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FORMAT_ERROR",
                    FORMAT_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
