mod http;
mod services;
mod storage;

pub use http::{HttpAuthService, HttpScoringService};
pub use services::RemoteServices;
pub use storage::FileIdentityStore;
