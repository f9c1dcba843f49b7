//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use forum_common::{AppConfig, AppError, AppResult, StoreBackend};
use forum_db::{create_pool, ensure_schema, MemoryStore, PoolConfig};
use forum_service::{LoggingListener, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.cors,
        config.app.env.is_production(),
        config.request_timeout(),
    );
    router.with_state(state)
}

/// Initialize the configured storage backend and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    match config.store {
        StoreBackend::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(database))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            let builder = ServiceContextBuilder::postgres(pool);
            build_state(builder, config)
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory store; data is lost on restart");
            memory_app_state(&MemoryStore::new(), config)
        }
    }
}

/// AppState over an existing in-memory store
pub fn memory_app_state(store: &MemoryStore, config: AppConfig) -> AppResult<AppState> {
    build_state(ServiceContextBuilder::memory(store), config)
}

fn build_state(builder: ServiceContextBuilder, config: AppConfig) -> AppResult<AppState> {
    let service_context = builder
        .moderation(config.moderation)
        .listener(Arc::new(LoggingListener))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))
        .map_err(AppError::Internal)?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server stopped")
        .map_err(AppError::Internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "API_PORT" => Some("0".to_string()),
            "STORE_BACKEND" => Some("memory".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_incomplete_context_is_a_config_error() {
        let err = build_state(ServiceContextBuilder::new(), memory_config()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_bind_failure_names_the_address() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();
        let app = create_app(memory_app_state(&MemoryStore::new(), memory_config()).unwrap());

        let err = run_server(app, addr).await.unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.to_string().contains(&format!("failed to bind to {addr}")));
    }
}
