use quizzle_types::scoring::{ScoreSubmission, ScoreSubmissionResult};

use crate::cqrs::Command;

/// Submits the score of a finished game to the scoring service.
#[derive(Debug, Clone)]
pub struct SubmitScore {
    pub submission: ScoreSubmission,
}

impl Command for SubmitScore {
    type Output = ScoreSubmissionResult;
}

/// Logs in and stores the returned session in the identity store.
#[derive(Clone)]
pub struct Login {
    pub username: String,
    pub password: String,
}

impl Command for Login {
    type Output = ();
}
