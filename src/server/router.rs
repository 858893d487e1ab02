use axum::{Json, Router, http::Method, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{
    handlers::{handle_manifest, handle_secondary},
    state::AppState,
};
use crate::config::Config;

pub const MANIFEST_ROUTE: &str = "/api/v1/vixcloud/manifest";
pub const SECONDARY_ROUTE: &str = "/api/v1/vixcloud/secondary";

/// Create the application router.
pub fn create_router(config: Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allowed_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(config.cors_allowed_origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    };

    let state = AppState::new(config)?;

    let app = Router::new()
        .route(MANIFEST_ROUTE, get(handle_manifest))
        .route(SECONDARY_ROUTE, get(handle_secondary))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
