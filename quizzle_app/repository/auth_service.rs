use quizzle_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApplicationError>;
}
