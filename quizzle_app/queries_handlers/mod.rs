mod get_identity;
mod get_leaderboard;

pub use get_identity::GetIdentityHandler;
pub use get_leaderboard::GetLeaderboardHandler;
