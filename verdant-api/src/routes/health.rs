//! Health check endpoints
//!
//! No authentication required for health endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Liveness response with process uptime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub uptime_seconds: u64,
}

/// Health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/ping", get(ping))
        .route("/health/live", get(live))
}

/// GET /health/ping - simple liveness check
async fn ping() -> &'static str {
    "pong"
}

/// GET /health/live - process alive check with uptime
async fn live(State(state): State<AppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
