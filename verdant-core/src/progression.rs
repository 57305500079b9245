//! Level and progress math over cumulative experience.
//!
//! Levels are fixed-size buckets of [`XP_PER_LEVEL`] experience points.
//! Both functions are pure and assume validated non-negative input; callers
//! that read experience from untrusted or nullable sources clamp to zero
//! before invoking them.

use serde::{Deserialize, Serialize};

use crate::entities::Account;

/// Experience points required to advance one level.
pub const XP_PER_LEVEL: i64 = 200;

/// Level for a cumulative experience total.
pub fn level_for(xp: i64) -> i32 {
    debug_assert!(xp >= 0, "experience must be non-negative");
    (xp / XP_PER_LEVEL) as i32
}

/// Experience accrued within the current level, in `[0, XP_PER_LEVEL)`.
pub fn progress_for(xp: i64) -> i64 {
    debug_assert!(xp >= 0, "experience must be non-negative");
    xp % XP_PER_LEVEL
}

/// Read-only projection of an account's progression state.
///
/// The level is recomputed from stored experience rather than read from the
/// persisted `level` column; the stored value is a cache that must agree
/// with [`level_for`] after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub experience: i64,
    pub level: i32,
    pub progress_into_level: i64,
    pub streak: i32,
    pub xp_per_level: i64,
}

impl Progression {
    /// Project progression from a stored account.
    pub fn from_account(account: &Account) -> Self {
        let xp = account.experience.max(0);
        Self {
            experience: xp,
            level: level_for(xp),
            progress_into_level: progress_for(xp),
            streak: account.streak.max(0),
            xp_per_level: XP_PER_LEVEL,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for(0), 0);
        assert_eq!(level_for(199), 0);
        assert_eq!(level_for(200), 1);
        assert_eq!(level_for(399), 1);
        assert_eq!(level_for(400), 2);
    }

    #[test]
    fn test_progress_wraps_at_level() {
        assert_eq!(progress_for(0), 0);
        assert_eq!(progress_for(5), 5);
        assert_eq!(progress_for(199), 199);
        assert_eq!(progress_for(200), 0);
        assert_eq!(progress_for(205), 5);
    }

    #[test]
    fn test_projection_recomputes_level_from_experience() {
        let mut account = Account::new("Fern", "fern@example.com");
        account.experience = 450;
        // Stale cached level must not leak into the projection.
        account.level = 0;
        account.streak = 3;

        let p = Progression::from_account(&account);
        assert_eq!(p.experience, 450);
        assert_eq!(p.level, 2);
        assert_eq!(p.progress_into_level, 50);
        assert_eq!(p.streak, 3);
        assert_eq!(p.xp_per_level, XP_PER_LEVEL);
    }

    #[test]
    fn test_projection_clamps_negative_experience() {
        let mut account = Account::new("Moss", "moss@example.com");
        account.experience = -5;
        let p = Progression::from_account(&account);
        assert_eq!(p.experience, 0);
        assert_eq!(p.level, 0);
        assert_eq!(p.progress_into_level, 0);
    }

    proptest! {
        /// Level buckets bracket the experience total.
        #[test]
        fn prop_level_brackets_experience(xp in 0i64..1_000_000) {
            let level = level_for(xp) as i64;
            prop_assert!(level * XP_PER_LEVEL <= xp);
            prop_assert!(xp < (level + 1) * XP_PER_LEVEL);
        }

        /// Progress is the remainder left over after whole levels.
        #[test]
        fn prop_progress_is_remainder(xp in 0i64..1_000_000) {
            let progress = progress_for(xp);
            prop_assert_eq!(progress, xp - level_for(xp) as i64 * XP_PER_LEVEL);
            prop_assert!((0..XP_PER_LEVEL).contains(&progress));
        }
    }
}
