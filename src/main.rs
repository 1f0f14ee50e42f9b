//! DevHub Blog Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use devhub_core::config::AppConfig;
use devhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `DEVHUB_ENV`
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DEVHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DevHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    tracing::info!("Connecting to database...");
    let db_pool = devhub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    devhub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(devhub_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let post_repo = Arc::new(devhub_database::repositories::post::PostRepository::new(
        db_pool.clone(),
    ));

    // ── Auth primitives ──────────────────────────────────────────
    let password_hasher = Arc::new(devhub_auth::password::PasswordHasher::new(&config.auth));
    let password_policy = Arc::new(devhub_auth::password::PasswordPolicy::new(&config.auth));
    let jwt_encoder = Arc::new(devhub_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(devhub_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(devhub_service::auth::service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
        Arc::clone(&jwt_encoder),
    ));
    let post_service = Arc::new(devhub_service::post::service::PostService::new(Arc::clone(
        &post_repo,
    )));
    let user_service = Arc::new(devhub_service::user::service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = devhub_api::state::AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        auth_service,
        post_service,
        user_service,
    };

    let app = devhub_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DevHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("DevHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
