//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use devhub_auth::jwt::decoder::JwtDecoder;
use devhub_core::config::AppConfig;
use devhub_service::auth::service::AuthService;
use devhub_service::post::service::PostService;
use devhub_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token decoder used by the authorization gate.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and sign-in flows.
    pub auth_service: Arc<AuthService>,
    /// Blog post operations.
    pub post_service: Arc<PostService>,
    /// User self-service operations.
    pub user_service: Arc<UserService>,
}
