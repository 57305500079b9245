//! Account registration and lookup routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use verdant_core::{Account, AccountId};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for account registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    pub display_name: String,
    pub email: String,
}

/// POST /api/v1/accounts - register a new account
///
/// New accounts start with zeroed progression; only awards and streak
/// touches mutate it afterwards.
pub async fn register_account(
    State(state): State<AppState>,
    Json(request): Json<RegisterAccountRequest>,
) -> ApiResult<impl IntoResponse> {
    let display_name = request.display_name.trim();
    let email = request.email.trim();
    if display_name.is_empty() {
        return Err(ApiError::invalid_input("display_name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::invalid_input("a valid email is required"));
    }

    let account = Account::new(display_name, email.to_lowercase());
    state.store.account_insert(&account).await?;
    tracing::info!(account_id = %account.account_id, "account registered");

    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /api/v1/accounts/:id - fetch a stored account
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> ApiResult<Json<Account>> {
    let account = state
        .store
        .account_get(id)
        .await?
        .ok_or_else(|| ApiError::account_not_found(format!("account not found: {}", id)))?;
    Ok(Json(account))
}
