use quizzle_types::errors::ApplicationError;

/// Key-value store persisted on the device. The submission workflow only
/// reads from it, the login flow writes to it.
#[async_trait::async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}
