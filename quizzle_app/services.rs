use std::sync::Arc;

use crate::repository::*;

/// Provides the collaborators that commands and queries talk to.
/// Implemented by the real network/storage stack and by test fakes.
pub trait ServiceProvider: Send + Sync {
    fn identity(&self) -> Arc<dyn IdentityRepository>;
    fn scoring(&self) -> Arc<dyn ScoringService>;
    fn auth(&self) -> Arc<dyn AuthService>;
}
