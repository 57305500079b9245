//! Progression snapshot and leaderboard routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use verdant_core::{AccountId, Progression};
use verdant_ledger::LeaderboardEntry;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const DEFAULT_LEADERBOARD_SIZE: usize = 10;
const MAX_LEADERBOARD_SIZE: usize = 100;

/// Query parameters for the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

/// GET /api/v1/accounts/:id/progression - read-only progression snapshot
pub async fn get_progression(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> ApiResult<Json<Progression>> {
    let snapshot = state
        .progression
        .snapshot(id)
        .await?
        .ok_or_else(|| ApiError::account_not_found(format!("account not found: {}", id)))?;
    Ok(Json(snapshot))
}

/// GET /api/v1/leaderboard - community standings by experience
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_LEADERBOARD_SIZE)
        .min(MAX_LEADERBOARD_SIZE);
    let standings = state.progression.leaderboard(limit).await?;
    Ok(Json(standings))
}
