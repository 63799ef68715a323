use thiserror::Error;

/// Errors raised while reading or writing the local identity store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Username not found")]
    NotFound,

    #[error("Identity storage error: {0}")]
    Storage(String),
}
