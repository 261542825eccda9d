use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use std::sync::Arc;

use crate::api::extract::UserBody;
use crate::api::AppState;
use crate::error::AppResult;

const HOME_PAGE: &str = include_str!("../assets/home.html");

pub async fn home() -> impl IntoResponse {
    Html(HOME_PAGE)
}

/// Lead-capture form on the landing page.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    UserBody(body): UserBody,
) -> AppResult<Redirect> {
    let user = body.validate()?;
    let created = state.users.insert(&user).await?;
    tracing::info!("Lead captured: user {}", created.id);
    Ok(Redirect::to("/"))
}
