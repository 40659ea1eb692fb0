// src/routes/chat.rs
use axum::{Json, extract::State};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{interpreter::interpret, prompt_builder::build_prompt},
    state::SharedState,
};

/// `POST /api/chat`: prompt, complete, interpret. Parse failures still return 200.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let prompt = build_prompt(&payload.message, state.listings.listings());

    let raw = state.completion.complete(&prompt).await?;

    let response = interpret(&raw).into_response();
    info!(
        recommendations = response.recommendations.len(),
        "chat request answered"
    );

    Ok(Json(response))
}
