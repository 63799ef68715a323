use thiserror::Error;

/// Errors for the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Login failed: {0}")]
    Rejected(String),

    #[error("Could not reach login service: {0}")]
    Transport(String),

    #[error("Malformed login response: {0}")]
    Parse(String),
}
