// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::services::completion::CompletionError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Completion(e) => {
                error!(error = %e, "completion backend failed");
                (StatusCode::BAD_GATEWAY, "completion backend failed".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
