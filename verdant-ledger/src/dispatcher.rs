//! Award dispatch: the single call surface for granting experience.

use std::sync::Arc;

use verdant_core::{AccountId, AwardEvent, LedgerError, LedgerResult, StorageError};
use verdant_storage::AccountStore;

/// Applies point awards to accounts as one atomic read-modify-write.
///
/// Granting is deliberately not idempotent: two grants apply twice. Each
/// call site owns its own non-duplication guard and must only grant after
/// the triggering action is confirmed persisted. The dispatcher performs no
/// retries; a storage failure leaves the account unchanged and is reported
/// as a typed error for the caller to act on.
pub struct AwardDispatcher {
    store: Arc<dyn AccountStore>,
}

impl AwardDispatcher {
    /// Create a dispatcher over an injected store handle.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Grant `amount` points to an account and return the new cumulative
    /// experience. The stored level is recomputed in the same write.
    ///
    /// `amount` of zero is a well-defined no-op that still succeeds and
    /// returns the unchanged experience total.
    pub async fn grant(&self, account_id: AccountId, amount: u32) -> LedgerResult<i64> {
        match self.store.account_apply_award(account_id, i64::from(amount)).await {
            Ok(experience) => {
                tracing::debug!(%account_id, amount, experience, "granted experience");
                Ok(experience)
            }
            Err(StorageError::NotFound { id }) => Err(LedgerError::AccountNotFound { id }),
            Err(err) => Err(LedgerError::StorageUnavailable(err)),
        }
    }

    /// Grant the points carried by an award event.
    pub async fn dispatch(&self, event: &AwardEvent) -> LedgerResult<i64> {
        let experience = self.grant(event.account_id, event.points).await?;
        tracing::info!(
            account_id = %event.account_id,
            action = event.action.slug(),
            points = event.points,
            experience,
            "award applied"
        );
        Ok(experience)
    }
}

// ============================================================================
// TESTS
// ============================================================================
