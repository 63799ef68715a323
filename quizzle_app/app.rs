use std::sync::Arc;

use quizzle_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    services::ServiceProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself, it hands each Command or
/// Query to its handler along with the services and configuration.
pub struct AppBus {
    config: Arc<Config>,
    services: Arc<dyn ServiceProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, services: Arc<dyn ServiceProvider>) -> Self {
        Self { config, services }
    }

    /// Executes a command, an operation with side effects.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let command_name = std::any::type_name::<C>();
        let result = handler.handle(cmd, &self.services, &self.config).await;

        if let Err(e) = &result {
            tracing::debug!(command = command_name, error = %e, "Command failed");
        }
        result
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let query_name = std::any::type_name::<Q>();
        let result = handler.handle(query, &self.services, &self.config).await;

        if let Err(e) = &result {
            tracing::debug!(query = query_name, error = %e, "Query failed");
        }
        result
    }
}
