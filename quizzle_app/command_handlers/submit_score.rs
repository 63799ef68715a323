use std::sync::Arc;

use quizzle_types::{Result, scoring::ScoreSubmissionResult};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SubmitScore},
    services::ServiceProvider,
};

pub struct SubmitScoreCommandHandler;

impl SubmitScoreCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<SubmitScore> for SubmitScoreCommandHandler {
    async fn handle(
        &self,
        command: SubmitScore,
        services: &Arc<dyn ServiceProvider>,
        _config: &Arc<Config>,
    ) -> Result<ScoreSubmissionResult> {
        let submission = command.submission;
        tracing::info!(
            username = %submission.username,
            score = submission.score,
            category = submission.category,
            "Submitting score"
        );

        let result = services.scoring().submit(&submission).await?;

        tracing::debug!(
            position = ?result.leaderboard_position,
            personal_record = result.is_personal_record,
            "Score accepted"
        );
        Ok(result)
    }
}
