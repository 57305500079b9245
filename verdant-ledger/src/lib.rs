//! Verdant Ledger - Gamification Progression
//!
//! The one component of the backend with cross-cutting invariants: point
//! awards accumulate monotonically into experience and a derived level,
//! daily activity extends a calendar-day streak, and both are projected
//! into a read-only snapshot for display.
//!
//! Construction is explicit: every piece takes its [`AccountStore`] handle
//! at build time, owned and wired by the process entry point. There are no
//! module-level singletons.

pub mod dispatcher;
pub mod snapshot;
pub mod streak;

pub use dispatcher::AwardDispatcher;
pub use snapshot::{LeaderboardEntry, ProgressionReader};
pub use streak::StreakTracker;
