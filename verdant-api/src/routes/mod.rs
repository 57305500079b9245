//! REST API routes
//!
//! Route handlers organized by concern: account registration, action
//! recording (the award hook feature code calls), progression reads, and
//! health checks.

pub mod account;
pub mod action;
pub mod health;
pub mod progression;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::state::AppState;

/// Build the full API router with CORS and request tracing.
pub fn create_api_router(state: AppState, config: &ApiConfig) -> Router {
    let api = Router::new()
        .route("/accounts", post(account::register_account))
        .route("/accounts/:id", get(account::get_account))
        .route("/accounts/:id/actions", post(action::record_action))
        .route("/accounts/:id/progression", get(progression::get_progression))
        .route("/leaderboard", get(progression::get_leaderboard));

    Router::new()
        .merge(health::router())
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_origins))
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST];
    if origins.is_empty() {
        // Dev mode: allow all origins.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(methods)
        .allow_headers(Any)
}
