//! Route definitions for the BoxOffice HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(seat_routes()).merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Seat listing and hold/confirm/release endpoints.
fn seat_routes() -> Router<AppState> {
    Router::new()
        .route("/seats", get(handlers::seats::list_seats))
        .route("/seats/{id}", get(handlers::seats::get_seat))
        .route("/seats/{id}/hold", post(handlers::seats::hold_seat))
        .route("/seats/{id}/confirm", post(handlers::seats::confirm_seat))
        .route("/seats/{id}/release", post(handlers::seats::release_seat))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
