pub mod category;
pub mod common;
pub mod errors;
pub mod leaderboard;
pub mod scoring;

pub use errors::Result;
