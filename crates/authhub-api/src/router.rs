//! Route definitions for the AuthHub HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(handlers::health::status))
        .route("/users", post(handlers::auth::register))
        .route(
            "/sessions",
            post(handlers::auth::login).delete(handlers::auth::logout),
        )
        .route("/profile", get(handlers::user::profile))
        .route(
            "/reset_password",
            post(handlers::auth::issue_reset_token).put(handlers::auth::update_password),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}
