use serde::{Deserialize, Serialize};

use crate::common::{GameResult, Identity};

/// Position reported by the scoring service when the score was evaluated but
/// did not make it into the tracked top set.
pub const NOT_RANKED: i64 = -1;

/// Body of `POST /leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub username: String,
    pub score: i64,
    pub category: i64,
}

impl ScoreSubmission {
    pub fn new(identity: &Identity, result: &GameResult) -> Self {
        Self {
            username: identity.username.clone(),
            score: i64::from(result.points),
            category: i64::from(result.category_id),
        }
    }
}

/// Response of `POST /leaderboard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmissionResult {
    /// `None`: no ranking information. `Some(-1)`: not in the top set.
    /// Positive values are 1-based ranks.
    #[serde(default)]
    pub leaderboard_position: Option<i64>,
    #[serde(default)]
    pub is_personal_record: bool,
}

impl ScoreSubmissionResult {
    pub fn new(leaderboard_position: Option<i64>, is_personal_record: bool) -> Self {
        Self {
            leaderboard_position,
            is_personal_record,
        }
    }
}
