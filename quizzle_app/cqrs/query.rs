use async_trait::async_trait;
use quizzle_types::errors::ApplicationError;
use std::sync::Arc;

use crate::{config::Config, services::ServiceProvider};

/// A marker trait for Query structs.
/// Queries are operations that read the state of the system.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        services: &Arc<dyn ServiceProvider>,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
