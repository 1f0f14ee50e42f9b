//! Route definitions for the DevHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(post_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, signin, google
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/signin", post(handlers::auth::sign_in))
        .route("/auth/google", post(handlers::auth::google_auth))
}

/// Post CRUD; all require a valid session token
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(handlers::post::list_posts))
        .route("/posts", post(handlers::post::create_post))
        .route("/posts/{id}", get(handlers::post::get_post))
        .route("/posts/{id}", delete(handlers::post::delete_post))
}

/// User self-service endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
