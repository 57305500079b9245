//! Read-only progression projections.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use verdant_core::{level_for, AccountId, Progression, StorageResult};
use verdant_storage::AccountStore;

/// One row of the community leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub account_id: AccountId,
    pub display_name: String,
    pub experience: i64,
    pub level: i32,
    pub streak: i32,
}

/// Assembles display-facing projections of stored progression state.
///
/// Never mutates. Levels are always recomputed from experience so a stale
/// cached level can never reach a client.
pub struct ProgressionReader {
    store: Arc<dyn AccountStore>,
}

impl ProgressionReader {
    /// Create a reader over an injected store handle.
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Progression snapshot for one account, or `None` if it does not exist.
    pub async fn snapshot(&self, account_id: AccountId) -> StorageResult<Option<Progression>> {
        let account = self.store.account_get(account_id).await?;
        Ok(account.as_ref().map(Progression::from_account))
    }

    /// Top accounts by experience for the community standings.
    pub async fn leaderboard(&self, limit: usize) -> StorageResult<Vec<LeaderboardEntry>> {
        let accounts = self.store.account_list_top_by_xp(limit).await?;
        Ok(accounts
            .into_iter()
            .map(|account| {
                let xp = account.experience.max(0);
                LeaderboardEntry {
                    account_id: account.account_id,
                    display_name: account.display_name,
                    experience: xp,
                    level: level_for(xp),
                    streak: account.streak.max(0),
                }
            })
            .collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::XP_PER_LEVEL;
    use verdant_test_utils::{account_with_xp, fresh_account, store_with};

    #[tokio::test]
    async fn test_snapshot_projects_stored_state() {
        let mut account = account_with_xp(XP_PER_LEVEL + 50);
        account.streak = 6;
        let id = account.account_id;
        let store = store_with([account]).await;
        let reader = ProgressionReader::new(store);

        let snapshot = reader.snapshot(id).await.unwrap().unwrap();
        assert_eq!(snapshot.experience, 250);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.progress_into_level, 50);
        assert_eq!(snapshot.streak, 6);
        assert_eq!(snapshot.xp_per_level, XP_PER_LEVEL);
    }

    #[tokio::test]
    async fn test_snapshot_missing_account_is_none() {
        let store = store_with([]).await;
        let reader = ProgressionReader::new(store);

        let snapshot = reader.snapshot(verdant_core::new_account_id()).await.unwrap();
        assert!(snapshot.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_ignores_stale_cached_level() {
        let mut account = account_with_xp(3 * XP_PER_LEVEL);
        account.level = 0; // stale cache
        let id = account.account_id;
        let store = store_with([account]).await;
        let reader = ProgressionReader::new(store);

        let snapshot = reader.snapshot(id).await.unwrap().unwrap();
        assert_eq!(snapshot.level, 3);
    }

    #[tokio::test]
    async fn test_leaderboard_ranks_by_experience() {
        let low = account_with_xp(10);
        let high = account_with_xp(500);
        let fresh = fresh_account();
        let high_id = high.account_id;
        let store = store_with([low, high, fresh]).await;
        let reader = ProgressionReader::new(store);

        let standings = reader.leaderboard(10).await.unwrap();
        assert_eq!(standings.len(), 3);
        assert_eq!(standings[0].account_id, high_id);
        assert_eq!(standings[0].experience, 500);
        assert_eq!(standings[0].level, 2);
    }
}
