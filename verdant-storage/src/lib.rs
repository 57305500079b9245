//! Verdant Storage - Account Repository Trait and In-Memory Implementation
//!
//! Defines the typed storage abstraction for gamification accounts. A
//! relational implementation lives with the deployment, not here; the
//! in-memory store is the reference implementation used by tests and
//! development servers.

use ::async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use verdant_core::{level_for, Account, AccountId, StorageError, StorageResult};

// ============================================================================
// UPDATE TYPES
// ============================================================================

/// Update payload for accounts.
///
/// Absent fields are left untouched. Setting `experience` recomputes and
/// persists the derived level in the same write; the stored level can never
/// drift from the stored experience.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    /// New display name
    pub display_name: Option<String>,
    /// Corrected cumulative experience (administrative use)
    pub experience: Option<i64>,
    /// New streak count
    pub streak: Option<i32>,
    /// New last streak date
    pub last_streak_date: Option<NaiveDate>,
}

// ============================================================================
// STORAGE TRAIT
// ============================================================================

/// Repository trait for gamification accounts.
///
/// Methods are typed per operation; there is no generic query surface.
/// Implementations must apply each write as a single atomic operation so a
/// failure never leaves experience and level half-updated.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account.
    async fn account_insert(&self, account: &Account) -> StorageResult<()>;

    /// Get an account by ID.
    async fn account_get(&self, id: AccountId) -> StorageResult<Option<Account>>;

    /// Update account fields.
    async fn account_update(&self, id: AccountId, update: AccountUpdate) -> StorageResult<()>;

    /// Add `amount` to the account's experience and persist the recomputed
    /// level in the same write. Returns the new cumulative experience.
    ///
    /// This is the atomic award primitive: relational implementations map it
    /// to a single `UPDATE accounts SET experience = experience + $1, ...`
    /// statement so concurrent awards to one account cannot lose an update.
    async fn account_apply_award(&self, id: AccountId, amount: i64) -> StorageResult<i64>;

    /// List the top accounts ordered by experience, descending.
    async fn account_list_top_by_xp(&self, limit: usize) -> StorageResult<Vec<Account>>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// In-memory account store backed by a hash map.
///
/// The reference implementation: every trait method holds the lock for the
/// whole read-modify-write, so each write is atomic with respect to
/// concurrent callers.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored accounts.
    pub fn clear(&self) {
        if let Ok(mut accounts) = self.accounts.write() {
            accounts.clear();
        }
    }

    /// Get count of stored accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.read().map(|a| a.len()).unwrap_or(0)
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn account_insert(&self, account: &Account) -> StorageResult<()> {
        let mut accounts = self.accounts.write().map_err(|_| StorageError::LockPoisoned)?;
        if accounts.contains_key(&account.account_id) {
            return Err(StorageError::AlreadyExists {
                id: account.account_id,
            });
        }
        accounts.insert(account.account_id, account.clone());
        Ok(())
    }

    async fn account_get(&self, id: AccountId) -> StorageResult<Option<Account>> {
        let accounts = self.accounts.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(accounts.get(&id).cloned())
    }

    async fn account_update(&self, id: AccountId, update: AccountUpdate) -> StorageResult<()> {
        let mut accounts = self.accounts.write().map_err(|_| StorageError::LockPoisoned)?;
        let account = accounts
            .get_mut(&id)
            .ok_or(StorageError::NotFound { id })?;

        if let Some(display_name) = update.display_name {
            account.display_name = display_name;
        }
        if let Some(experience) = update.experience {
            account.experience = experience;
            account.level = level_for(experience.max(0));
        }
        if let Some(streak) = update.streak {
            account.streak = streak;
        }
        if let Some(last_streak_date) = update.last_streak_date {
            account.last_streak_date = Some(last_streak_date);
        }
        account.updated_at = Utc::now();

        Ok(())
    }

    async fn account_apply_award(&self, id: AccountId, amount: i64) -> StorageResult<i64> {
        let mut accounts = self.accounts.write().map_err(|_| StorageError::LockPoisoned)?;
        let account = accounts
            .get_mut(&id)
            .ok_or(StorageError::NotFound { id })?;

        account.experience += amount;
        account.level = level_for(account.experience.max(0));
        account.updated_at = Utc::now();

        Ok(account.experience)
    }

    async fn account_list_top_by_xp(&self, limit: usize) -> StorageResult<Vec<Account>> {
        let accounts = self.accounts.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut ranked: Vec<Account> = accounts.values().cloned().collect();
        ranked.sort_by(|a, b| {
            b.experience
                .cmp(&a.experience)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        ranked.truncate(limit);
        Ok(ranked)
    }
}

// ============================================================================
// TESTS
// ============================================================================
