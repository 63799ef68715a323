use async_trait::async_trait;
use quizzle_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, services::ServiceProvider};

/// A marker trait for Command structs.
/// Commands are operations that cause side effects on remote or local state.
pub trait Command: Send + Sync {
    /// What the side effect reports back to the caller.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// It receives the command and the services it is allowed to talk to.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        services: &Arc<dyn ServiceProvider>,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
