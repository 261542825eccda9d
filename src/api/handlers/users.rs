use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::extract::UserBody;
use crate::api::AppState;
use crate::db::models::user::User;
use crate::error::{AppError, AppResult};

const USER_NOT_FOUND: &str = "Usuário não encontrado";

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

/// Only unsigned digit strings name a record; anything else is unmatched.
fn parse_id(raw: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    raw.parse().map_err(|_| not_found())
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.users.all().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    UserBody(body): UserBody,
) -> AppResult<(StatusCode, Json<Vec<User>>)> {
    let user = body.validate()?;
    let created = state.users.insert(&user).await?;
    tracing::info!("Created user {}", created.id);

    let users = state.users.all().await?;
    Ok((StatusCode::CREATED, Json(users)))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.users.find(id).await?.ok_or_else(not_found)?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    UserBody(body): UserBody,
) -> AppResult<Json<User>> {
    // Body problems are reported before the lookup
    let user = body.validate()?;
    let id = parse_id(&id)?;

    let updated = state.users.update(id, &user).await?.ok_or_else(not_found)?;
    tracing::info!("Updated user {}", updated.id);
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<User>>> {
    let id = parse_id(&id)?;
    if !state.users.delete(id).await? {
        return Err(not_found());
    }
    tracing::info!("Deleted user {}", id);

    Ok(Json(state.users.all().await?))
}
