//! Award-qualifying user actions and their point values.

use serde::{Deserialize, Serialize};

/// A user action that earns experience points.
///
/// Point values are fixed per action, except challenge completion, which
/// carries the points defined by the completed challenge. Watering is the
/// only action that also qualifies for the daily streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ActionKind {
    WateredPlant,
    AddedGardenItem,
    PlantPhotoApproved,
    ForumPost,
    ForumComment,
    ForumLike,
    SharedChallenge,
    CompletedChallenge { points: u32 },
}

impl ActionKind {
    /// Points granted for this action.
    pub fn points(&self) -> u32 {
        match self {
            ActionKind::WateredPlant => 5,
            ActionKind::AddedGardenItem => 10,
            ActionKind::PlantPhotoApproved => 10,
            ActionKind::ForumPost => 2,
            ActionKind::ForumComment => 5,
            ActionKind::ForumLike => 3,
            ActionKind::SharedChallenge => 10,
            ActionKind::CompletedChallenge { points } => *points,
        }
    }

    /// Whether this action counts toward the daily activity streak.
    pub fn touches_streak(&self) -> bool {
        matches!(self, ActionKind::WateredPlant)
    }

    /// Stable identifier used in logs and API payloads.
    pub fn slug(&self) -> &'static str {
        match self {
            ActionKind::WateredPlant => "watered-plant",
            ActionKind::AddedGardenItem => "added-garden-item",
            ActionKind::PlantPhotoApproved => "plant-photo-approved",
            ActionKind::ForumPost => "forum-post",
            ActionKind::ForumComment => "forum-comment",
            ActionKind::ForumLike => "forum-like",
            ActionKind::SharedChallenge => "shared-challenge",
            ActionKind::CompletedChallenge { .. } => "completed-challenge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_values() {
        assert_eq!(ActionKind::WateredPlant.points(), 5);
        assert_eq!(ActionKind::AddedGardenItem.points(), 10);
        assert_eq!(ActionKind::ForumPost.points(), 2);
        assert_eq!(ActionKind::ForumComment.points(), 5);
        assert_eq!(ActionKind::ForumLike.points(), 3);
        assert_eq!(ActionKind::SharedChallenge.points(), 10);
        assert_eq!(ActionKind::CompletedChallenge { points: 40 }.points(), 40);
    }

    #[test]
    fn test_only_watering_touches_streak() {
        assert!(ActionKind::WateredPlant.touches_streak());
        assert!(!ActionKind::ForumPost.touches_streak());
        assert!(!ActionKind::CompletedChallenge { points: 1 }.touches_streak());
    }

    #[test]
    fn test_serde_uses_kebab_case_tag() {
        let json = serde_json::to_string(&ActionKind::WateredPlant).unwrap();
        assert!(json.contains("watered-plant"));

        let parsed: ActionKind =
            serde_json::from_str(r#"{"kind":"completed-challenge","points":25}"#).unwrap();
        assert_eq!(parsed, ActionKind::CompletedChallenge { points: 25 });
    }
}
