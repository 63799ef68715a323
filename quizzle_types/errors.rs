use thiserror::Error;

pub mod auth_error;
pub mod identity_error;
pub mod query_error;
pub mod submission_error;

pub use auth_error::AuthError;
pub use identity_error::IdentityError;
pub use query_error::QueryError;
pub use submission_error::SubmissionError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_convert_transparently() {
        let err: ApplicationError = IdentityError::NotFound.into();
        assert!(matches!(err, ApplicationError::Identity(IdentityError::NotFound)));
        assert_eq!(err.to_string(), IdentityError::NotFound.to_string());

        let err: ApplicationError = SubmissionError::Status(500).into();
        assert_eq!(err.to_string(), SubmissionError::Status(500).to_string());
    }
}
