use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn storage(context: impl Into<String>, source: StoreError) -> Self {
        AppError::Storage {
            context: context.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage { context, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{context}: {source}"),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(msg) => tonic::Status::not_found(msg),
            AppError::Validation(msg) => tonic::Status::invalid_argument(msg),
            AppError::Storage { context, source } => {
                tonic::Status::internal(format!("{context}: {source}"))
            }
            AppError::Internal(msg) => tonic::Status::internal(msg),
        }
    }
}
