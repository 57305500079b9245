//! Verdant API - REST surface for the gardening backend
//!
//! Thin Axum layer over the gamification ledger: account registration,
//! action recording, progression reads, and health checks. Process wiring
//! (config, tracing, storage injection) lives here too.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_api_router;
pub use state::AppState;
pub use telemetry::init_tracing;
