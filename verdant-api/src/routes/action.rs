//! Action recording: the award hook feature code calls.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use verdant_core::{level_for, AccountId, ActionKind, AwardEvent};

use crate::error::ApiResult;
use crate::state::AppState;

/// Response for a recorded action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedAward {
    pub action: String,
    pub points: u32,
    pub experience: i64,
    pub level: i32,
}

/// POST /api/v1/accounts/:id/actions - record a completed action
///
/// Callers record an action only after it has been persisted by its own
/// feature; recording grants the action's points exactly once per call.
/// Watering also touches the daily streak, fired as a detached best-effort
/// task so a streak failure can never fail this request.
pub async fn record_action(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Json(action): Json<ActionKind>,
) -> ApiResult<Json<RecordedAward>> {
    let event = AwardEvent::for_action(id, action);
    let experience = state.awards.dispatch(&event).await?;

    if event.action.touches_streak() {
        let streaks = state.streaks.clone();
        let today = Utc::now().date_naive();
        tokio::spawn(async move {
            streaks.touch(id, today).await;
        });
    }

    Ok(Json(RecordedAward {
        action: event.action.slug().to_string(),
        points: event.points,
        experience,
        level: level_for(experience.max(0)),
    }))
}
