use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use chatdesk_core::SettingsDocument;

use crate::api_error::ApiError;
use crate::AppState;

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<SettingsDocument> {
    Json(state.settings_service.get_settings().await)
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<SettingsDocument>, ApiError> {
    let Json(partial) = payload?;
    let settings = state.settings_service.update_settings(partial).await?;
    Ok(Json(settings))
}
