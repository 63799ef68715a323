mod auth_service;
mod identity_repository;
mod scoring_service;

pub use auth_service::AuthService;
pub use identity_repository::IdentityRepository;
pub use scoring_service::ScoringService;
