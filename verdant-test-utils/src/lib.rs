//! Verdant Test Utilities
//!
//! Centralized test infrastructure for the Verdant workspace:
//! - Account fixtures in common progression states
//! - A pre-populated in-memory store constructor
//!
//! Fixtures panic on storage failure; they are test-only code.

use std::sync::Arc;

use chrono::NaiveDate;

// Re-export the in-memory store from its source crate
pub use verdant_storage::InMemoryStore;

// Re-export core types for convenience
pub use verdant_core::{
    level_for, progress_for, Account, AccountId, ActionKind, AwardEvent, LedgerError,
    StorageError, XP_PER_LEVEL,
};

use verdant_storage::AccountStore;

/// A freshly registered account with zeroed progression.
pub fn fresh_account() -> Account {
    Account::new("Test Gardener", "gardener@example.com")
}

/// An account holding `xp` experience with a consistent cached level.
pub fn account_with_xp(xp: i64) -> Account {
    let mut account = fresh_account();
    account.experience = xp;
    account.level = level_for(xp.max(0));
    account
}

/// An account mid-streak: `streak` consecutive days, last counted on `last`.
pub fn account_with_streak(streak: i32, last: NaiveDate) -> Account {
    let mut account = fresh_account();
    account.streak = streak;
    account.last_streak_date = Some(last);
    account
}

/// An in-memory store pre-populated with the given accounts.
pub async fn store_with(accounts: impl IntoIterator<Item = Account>) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for account in accounts {
        store
            .account_insert(&account)
            .await
            .expect("fixture insert failed");
    }
    store
}
