use quizzle_types::scoring::{NOT_RANKED, ScoreSubmissionResult};

/// What the result screen celebrates after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementState {
    /// Evaluated, but outside the tracked top set.
    NoRank,
    RankOnly(i64),
    RecordOnly,
    RankAndRecord(i64),
}

impl AchievementState {
    /// Maps a scoring response to the achievement to display. `None` means
    /// neither ranked nor a personal record, so no message is shown.
    ///
    /// The `-1` sentinel wins over `is_personal_record`: a record that did
    /// not make the leaderboard is reported as [`AchievementState::NoRank`].
    pub fn derive(result: &ScoreSubmissionResult) -> Option<Self> {
        match result.leaderboard_position {
            Some(NOT_RANKED) => Some(Self::NoRank),
            Some(position) if position > 0 && result.is_personal_record => {
                Some(Self::RankAndRecord(position))
            }
            Some(position) if position > 0 => Some(Self::RankOnly(position)),
            _ if result.is_personal_record => Some(Self::RecordOnly),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::NoRank => {
                "Sorry! You didn't reach the leaderboard this time.".to_string()
            }
            Self::RankAndRecord(position) => format!(
                "Double victory! You've set a new personal record and reached leaderboard position {position}! Keep up the amazing work!"
            ),
            Self::RankOnly(position) => {
                format!("Congratulations! You've reached leaderboard position {position}!")
            }
            Self::RecordOnly => "It's a new personal record! Keep going!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(position: Option<i64>, record: bool) -> Option<AchievementState> {
        AchievementState::derive(&ScoreSubmissionResult::new(position, record))
    }

    #[test]
    fn test_sentinel_is_no_rank_regardless_of_record() {
        assert_eq!(derive(Some(-1), false), Some(AchievementState::NoRank));
        assert_eq!(derive(Some(-1), true), Some(AchievementState::NoRank));
    }

    #[test]
    fn test_sentinel_with_record_shows_missed_leaderboard_message() {
        let state = derive(Some(-1), true).unwrap();
        assert!(state.message().contains("didn't reach the leaderboard"));
        assert!(!state.message().contains("personal record"));
    }

    #[test]
    fn test_rank_and_record() {
        let state = derive(Some(3), true);
        assert_eq!(state, Some(AchievementState::RankAndRecord(3)));
        assert!(state.unwrap().message().contains("leaderboard position 3"));
        assert!(state.unwrap().message().contains("personal record"));
    }

    #[test]
    fn test_rank_only() {
        assert_eq!(derive(Some(1), false), Some(AchievementState::RankOnly(1)));
    }

    #[test]
    fn test_record_only() {
        assert_eq!(derive(None, true), Some(AchievementState::RecordOnly));
    }

    #[test]
    fn test_no_ranking_information_and_no_record() {
        assert_eq!(derive(None, false), None);
    }

    #[test]
    fn test_non_positive_positions_carry_no_rank() {
        assert_eq!(derive(Some(0), false), None);
        assert_eq!(derive(Some(-7), true), Some(AchievementState::RecordOnly));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        for position in [None, Some(-1), Some(0), Some(1), Some(10)] {
            for record in [false, true] {
                let result = ScoreSubmissionResult::new(position, record);
                assert_eq!(
                    AchievementState::derive(&result),
                    AchievementState::derive(&result)
                );
            }
        }
    }
}
