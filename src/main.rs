//! AuthHub server binary: config load, wiring, and graceful shutdown.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use authhub_api::state::AppState;
use authhub_auth::account::AccountService;
use authhub_auth::authenticator;
use authhub_auth::password::{PasswordHasher, PasswordValidator};
use authhub_auth::session::SessionStore;
use authhub_core::config::AppConfig;
use authhub_core::error::AppError;
use authhub_directory::{MemoryUserDirectory, UserDirectory};

#[tokio::main]
async fn main() {
    let env = std::env::var("AUTHHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AuthHub v{}", env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    // User directory (in-memory; the persistence collaborator is external
    // to the auth core, so this is the single place to swap backends).
    let directory: Arc<dyn UserDirectory> = Arc::new(MemoryUserDirectory::new());

    // Auth system
    tracing::info!(
        "Initializing authentication (strategy: {})...",
        config.auth.strategy
    );
    let sessions = Arc::new(SessionStore::new(config.session.clone()));
    let hasher = PasswordHasher::new();
    let validator = PasswordValidator::new(&config.auth);
    let auth = authenticator::from_config(
        &config.auth,
        Arc::clone(&directory),
        Arc::clone(&sessions),
    );
    let accounts = Arc::new(AccountService::new(
        Arc::clone(&directory),
        Arc::clone(&sessions),
        hasher,
        validator,
    ));

    // HTTP server
    let app_state = AppState {
        config: Arc::clone(&config),
        directory,
        sessions,
        authenticator: auth,
        accounts,
    };
    let app = authhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("AuthHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("AuthHub server shut down gracefully");
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
