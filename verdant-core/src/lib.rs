//! Verdant Core - Entity Types and Progression Math
//!
//! Pure data structures and pure functions with no I/O. All other crates
//! in the workspace depend on this. This crate contains the account entity,
//! the action/award vocabulary, the error taxonomy, and the level math.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod actions;
pub mod entities;
pub mod error;
pub mod progression;

pub use actions::ActionKind;
pub use entities::{Account, AwardEvent};
pub use error::{ConfigError, LedgerError, LedgerResult, StorageError, StorageResult};
pub use progression::{level_for, progress_for, Progression, XP_PER_LEVEL};

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Account identifier using UUIDv7 for timestamp-sortable IDs.
pub type AccountId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 AccountId (timestamp-sortable).
pub fn new_account_id() -> AccountId {
    Uuid::now_v7()
}
