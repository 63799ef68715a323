use quizzle_types::{
    errors::ApplicationError,
    leaderboard::{LeaderboardEntry, LeaderboardQuery},
    scoring::{ScoreSubmission, ScoreSubmissionResult},
};

/// Remote scoring backend. Each call is exactly one request; retries are
/// the caller's decision.
#[async_trait::async_trait]
pub trait ScoringService: Send + Sync {
    /// Sends a finished game's score.
    async fn submit(
        &self,
        submission: &ScoreSubmission,
    ) -> Result<ScoreSubmissionResult, ApplicationError>;

    /// Lists ranked entries, in the order the service returned them.
    async fn query(&self, query: LeaderboardQuery)
    -> Result<Vec<LeaderboardEntry>, ApplicationError>;
}
