use thiserror::Error;

/// Errors for leaderboard listing (`GET /leaderboard`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Could not reach leaderboard service: {0}")]
    Transport(String),

    #[error("Leaderboard service answered with HTTP status {0}")]
    Status(u16),

    #[error("Malformed leaderboard response: {0}")]
    Parse(String),
}
