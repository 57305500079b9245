//! Verdant API server entry point
//!
//! Bootstraps tracing and configuration, constructs the storage handle, and
//! starts the Axum HTTP server.

use std::sync::Arc;

use verdant_api::{create_api_router, init_tracing, ApiConfig, ApiError, ApiResult, AppState};
use verdant_storage::{AccountStore, InMemoryStore};

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing();

    let config = ApiConfig::from_env()?;

    // The storage handle is constructed once here and injected downward.
    // Deployments against a relational provider swap this single line for
    // their own AccountStore implementation.
    let store: Arc<dyn AccountStore> = Arc::new(InMemoryStore::new());
    let state = AppState::new(store);

    let app = create_api_router(state, &config);

    let addr = config.bind_addr()?;
    tracing::info!(%addr, "Starting Verdant API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
