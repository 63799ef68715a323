use thiserror::Error;

/// Errors for score submission (`POST /leaderboard`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Could not reach scoring service: {0}")]
    Transport(String),

    #[error("Scoring service answered with HTTP status {0}")]
    Status(u16),

    #[error("Malformed scoring response: {0}")]
    Parse(String),
}
