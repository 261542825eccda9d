use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use std::sync::Arc;
use crate::config::Config;
use crate::db::UserStore;

pub mod extract;
pub mod handlers;
pub mod router;

pub struct AppState {
    pub users: UserStore,
    /// Directory served under /static
    pub static_dir: String,
}

pub async fn serve(cfg: Config, users: UserStore) -> Result<()> {
    let bind_addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let state = Arc::new(AppState {
        users,
        static_dir: cfg.server.static_dir.clone(),
    });
    let cors = cors_layer(&cfg.server.cors_allowed_origins);
    let app = build_app(state, cors);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Visual Touch listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// CORS for browser clients of the JSON API on other origins. The landing page
/// and its form are same-origin and never need it.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins = Vec::with_capacity(allowed_origins.len());
    for origin in allowed_origins {
        match HeaderValue::from_str(origin) {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        tracing::warn!("No CORS origins configured; the users API is same-origin only");
        return layer;
    }
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Routes with request tracing outermost, so CORS preflights are traced too.
pub fn build_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    router::routes(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
