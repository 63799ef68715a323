use std::sync::Arc;

use quizzle_types::{
    Result,
    common::{TOKEN_KEY, USERNAME_KEY},
    errors::AuthError,
};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::Login},
    services::ServiceProvider,
};

pub struct LoginCommandHandler;

impl LoginCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<Login> for LoginCommandHandler {
    async fn handle(
        &self,
        command: Login,
        services: &Arc<dyn ServiceProvider>,
        _config: &Arc<Config>,
    ) -> Result<()> {
        let username = command.username.trim();
        if username.is_empty() || command.password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        tracing::info!(username, "Attempting to log in");
        let token = services.auth().login(username, &command.password).await?;

        let identity = services.identity();
        identity.set(TOKEN_KEY, &token).await?;
        identity.set(USERNAME_KEY, username).await?;

        tracing::info!(username, "Login successful");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quizzle_types::{
        Result,
        errors::{ApplicationError, AuthError},
    };

    use super::*;
    use crate::test_utils::tests::{MockAuthService, MockIdentityRepository, MockServices};

    fn mocks() -> MockServices {
        MockServices {
            identity: MockIdentityRepository::new(),
            auth: MockAuthService::new().with_account("alice", "s3cret", "tok-123"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_username() -> Result<()> {
        let mocks = mocks();
        let bus = mocks.bus();

        bus.execute(
            Login {
                username: "alice".to_string(),
                password: "s3cret".to_string(),
            },
            LoginCommandHandler::new(),
        )
        .await?;

        assert_eq!(mocks.identity.token(), Some("tok-123".to_string()));
        assert_eq!(mocks.identity.value(USERNAME_KEY), Some("alice".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_login_wrong_password_stores_nothing() {
        let mocks = mocks();
        let bus = mocks.bus();

        let result = bus
            .execute(
                Login {
                    username: "alice".to_string(),
                    password: "wrong".to_string(),
                },
                LoginCommandHandler::new(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Auth(AuthError::Rejected(ref msg))) if msg == "Invalid credentials"
        ));
        assert_eq!(mocks.identity.token(), None);
    }

    #[tokio::test]
    async fn test_login_requires_credentials() {
        let mocks = mocks();
        let bus = mocks.bus();

        let result = bus
            .execute(
                Login {
                    username: "  ".to_string(),
                    password: "s3cret".to_string(),
                },
                LoginCommandHandler::new(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Auth(AuthError::MissingCredentials))
        ));
        assert!(mocks.auth.logins().is_empty());
    }
}
