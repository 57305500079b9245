//! Calendar-day activity streak tracking.

use std::sync::Arc;

use chrono::NaiveDate;

use verdant_core::AccountId;
use verdant_storage::{AccountStore, AccountUpdate};

/// Next streak value for an activity on `today`, or `None` when the day is
/// already counted.
///
/// Comparisons are calendar-day only; time-of-day and timezone offset are
/// discarded before this is called. Anything other than a same-day repeat
/// or a one-day extension, including dates in the future, resets to 1.
pub fn next_streak(last: Option<NaiveDate>, streak: i32, today: NaiveDate) -> Option<i32> {
    match last {
        Some(last) if last == today => None,
        Some(last) if (today - last).num_days() == 1 => Some(streak.max(0) + 1),
        _ => Some(1),
    }
}

/// Maintains the rolling count of consecutive active calendar days.
///
/// Streak updates are a best-effort side effect of the primary action. A
/// missing account is a silent no-op, and a failed write is logged and
/// swallowed; callers get no error signal from `touch` and must not depend
/// on one. Same-day re-entry never mutates the account.
pub struct StreakTracker {
    store: Arc<dyn AccountStore>,
}

impl StreakTracker {
    /// Create a tracker over an injected store handle.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Record qualifying activity for `today`.
    pub async fn touch(&self, account_id: AccountId, today: NaiveDate) {
        let account = match self.store.account_get(account_id).await {
            Ok(Some(account)) => account,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(%account_id, %err, "streak read failed; skipping update");
                return;
            }
        };

        let Some(streak) = next_streak(account.last_streak_date, account.streak, today) else {
            return;
        };

        let update = AccountUpdate {
            streak: Some(streak),
            last_streak_date: Some(today),
            ..Default::default()
        };
        if let Err(err) = self.store.account_update(account_id, update).await {
            tracing::warn!(%account_id, %err, "streak update failed; streaks are best-effort");
        } else {
            tracing::debug!(%account_id, streak, date = %today, "streak updated");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
