use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use quizzle_app::{
    config::Config,
    repository::{AuthService, ScoringService},
};
use quizzle_types::{
    errors::{ApplicationError, AuthError, QueryError, SubmissionError},
    leaderboard::{LeaderboardEntry, LeaderboardQuery},
    scoring::{ScoreSubmission, ScoreSubmissionResult},
};

const LEADERBOARD_PATH: &str = "leaderboard";
const LOGIN_PATH: &str = "login";

/// `ScoringService` speaking JSON over HTTP to the quizzle backend.
#[derive(Clone)]
pub struct HttpScoringService {
    client: Client,
    config: Arc<Config>,
}

impl HttpScoringService {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn submit(
        &self,
        submission: &ScoreSubmission,
    ) -> Result<ScoreSubmissionResult, ApplicationError> {
        let url = self.config.endpoint(LEADERBOARD_PATH);
        let response = self
            .client
            .post(&url)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Score submission rejected");
            return Err(SubmissionError::Status(status.as_u16()).into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let result = serde_json::from_slice::<ScoreSubmissionResult>(&body)
            .map_err(|e| SubmissionError::Parse(e.to_string()))?;

        tracing::debug!(?result, "Scoring response");
        Ok(result)
    }

    async fn query(
        &self,
        query: LeaderboardQuery,
    ) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
        let url = self.config.endpoint(LEADERBOARD_PATH);
        let response = self
            .client
            .get(&url)
            .query(&[("category", query.category_id)])
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Leaderboard query rejected");
            return Err(QueryError::Status(status.as_u16()).into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        let entries = serde_json::from_slice::<Vec<LeaderboardEntry>>(&body)
            .map_err(|e| QueryError::Parse(e.to_string()))?;

        Ok(entries)
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Default)]
struct LoginResponse {
    token: Option<String>,
    error: Option<String>,
}

/// `AuthService` backed by `POST /login`.
#[derive(Clone)]
pub struct HttpAuthService {
    client: Client,
    config: Arc<Config>,
}

impl HttpAuthService {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApplicationError> {
        let url = self.config.endpoint(LOGIN_PATH);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        tracing::debug!(status = status.as_u16(), "Login response");

        if !status.is_success() {
            // The error body is informative only; fall back when it is not JSON.
            let message = serde_json::from_slice::<LoginResponse>(&body)
                .unwrap_or_default()
                .error
                .unwrap_or_else(|| "Invalid credentials".to_string());
            return Err(AuthError::Rejected(message).into());
        }

        let parsed = serde_json::from_slice::<LoginResponse>(&body)
            .map_err(|e| AuthError::Parse(e.to_string()))?;
        parsed
            .token
            .ok_or_else(|| AuthError::Parse("missing token".to_string()).into())
    }
}
