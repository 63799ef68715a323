use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of `GET /leaderboard`. The service returns rows already ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(username: impl Into<String>, score: i64) -> Self {
        Self {
            username: username.into(),
            score,
        }
    }
}

/// Filter for `GET /leaderboard`. Category `0` means every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    pub category_id: u32,
}

impl LeaderboardQuery {
    pub fn new(category_id: u32) -> Self {
        Self { category_id }
    }
}

/// An entry together with its display rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub username: String,
    pub score: i64,
}

impl RankedEntry {
    /// Ranks follow the order the service delivered, starting at 1.
    pub fn rank_all(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RankedEntry {
                rank: index + 1,
                username: entry.username.clone(),
                score: entry.score,
            })
            .collect()
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}  {} p", self.rank, self.username, self.score)
    }
}
