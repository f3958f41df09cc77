use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use chatdesk_core::ChatMessage;

use crate::api_error::ApiError;
use crate::api_types::ChatRequestBody;
use crate::AppState;

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequestBody>, JsonRejection>,
) -> Result<Json<ChatMessage>, ApiError> {
    let Json(req) = payload?;
    let reply = state.chat_service.relay(&req.message, req.custom_prompt.as_deref()).await?;
    Ok(Json(reply))
}
