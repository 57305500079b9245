//! Core entity structures

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{actions::ActionKind, new_account_id, AccountId, Timestamp};

/// Account - the persistent gamification record for one gardener.
///
/// Created at registration with zeroed progression. `experience` is
/// monotonically non-decreasing except for administrative correction, and
/// the stored `level` always equals `level_for(experience)` after any
/// mutation. Accounts are never deleted by this component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    pub display_name: String,
    pub email: String,
    /// Cumulative experience points.
    pub experience: i64,
    /// Cached level; derived from `experience`, persisted alongside it.
    pub level: i32,
    /// Count of consecutive calendar days with qualifying activity.
    pub streak: i32,
    /// Calendar day of the most recent streak-qualifying activity.
    pub last_streak_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    /// Create a fresh account with zeroed progression state.
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            account_id: new_account_id(),
            display_name: display_name.into(),
            email: email.into(),
            experience: 0,
            level: 0,
            streak: 0,
            last_streak_date: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// AwardEvent - transient description of one point award.
///
/// Produced by feature code after the triggering action is confirmed
/// persisted, consumed exactly once by the award dispatcher. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardEvent {
    pub account_id: AccountId,
    pub action: ActionKind,
    /// Point quantity carried by the action.
    pub points: u32,
}

impl AwardEvent {
    /// Build the award event for an action, using the action's point value.
    pub fn for_action(account_id: AccountId, action: ActionKind) -> Self {
        let points = action.points();
        Self {
            account_id,
            action,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_starts_zeroed() {
        let account = Account::new("Sage", "sage@example.com");
        assert_eq!(account.experience, 0);
        assert_eq!(account.level, 0);
        assert_eq!(account.streak, 0);
        assert!(account.last_streak_date.is_none());
    }

    #[test]
    fn test_award_event_carries_action_points() {
        let id = new_account_id();
        let event = AwardEvent::for_action(id, ActionKind::WateredPlant);
        assert_eq!(event.points, 5);
        assert_eq!(event.account_id, id);
    }
}
