use reqwest::Client;
use std::sync::Arc;

use quizzle_app::{
    config::Config,
    repository::{AuthService, IdentityRepository, ScoringService},
    services::ServiceProvider,
};
use quizzle_types::errors::ApplicationError;

use crate::{FileIdentityStore, HttpAuthService, HttpScoringService};

/// The production [`ServiceProvider`]: HTTP backend plus on-disk identity.
#[derive(Clone)]
pub struct RemoteServices {
    identity: Arc<FileIdentityStore>,
    scoring: Arc<HttpScoringService>,
    auth: Arc<HttpAuthService>,
}

impl RemoteServices {
    pub fn new(config: Arc<Config>) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .user_agent(concat!("quizzle/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::Infrastructure(e.to_string()))?;

        Ok(Self {
            identity: Arc::new(FileIdentityStore::new(config.storage_path.clone())),
            scoring: Arc::new(HttpScoringService::new(client.clone(), config.clone())),
            auth: Arc::new(HttpAuthService::new(client, config)),
        })
    }
}

impl ServiceProvider for RemoteServices {
    fn identity(&self) -> Arc<dyn IdentityRepository> {
        self.identity.clone()
    }

    fn scoring(&self) -> Arc<dyn ScoringService> {
        self.scoring.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }
}
