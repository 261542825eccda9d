use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Landing page + lead form
        .route("/", get(handlers::home::home))
        .route("/submit", post(handlers::home::submit))
        .route("/health", get(handlers::health::health_check))
        // Users collection; the slash-less path is an alias
        .route("/api/users/", get(handlers::users::list).post(handlers::users::create))
        .route("/api/users", get(handlers::users::list).post(handlers::users::create))
        .route(
            "/api/users/{id}",
            get(handlers::users::get_one)
                .patch(handlers::users::update)
                .delete(handlers::users::remove),
        )
        .nest_service("/static", static_files)
        .with_state(state)
}
