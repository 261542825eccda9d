use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::error::AppResult;

pub async fn health_check(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    state.users.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}
