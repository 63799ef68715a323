use async_trait::async_trait;
use std::sync::Arc;

use quizzle_types::{
    common::{Identity, USERNAME_KEY},
    errors::{ApplicationError, IdentityError},
};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetIdentity},
    services::ServiceProvider,
};

pub struct GetIdentityHandler {}

impl GetIdentityHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetIdentity> for GetIdentityHandler {
    async fn handle(
        &self,
        _query: GetIdentity,
        services: &Arc<dyn ServiceProvider>,
        _config: &Arc<Config>,
    ) -> Result<<GetIdentity as Query>::Output, ApplicationError> {
        let username = services.identity().get(USERNAME_KEY).await?;

        username
            .and_then(Identity::new)
            .ok_or_else(|| ApplicationError::Identity(IdentityError::NotFound))
    }
}
