use quizzle_types::{
    common::Identity,
    leaderboard::{LeaderboardEntry, LeaderboardQuery},
};

use crate::cqrs::Query;

/// Reads the logged in player from the local identity store.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetIdentity;

impl Query for GetIdentity {
    type Output = Identity;
}

/// Fetch the ranked entries for a category.
#[derive(Debug, Clone, Copy)]
pub struct GetLeaderboard {
    pub query: LeaderboardQuery,
}

impl Query for GetLeaderboard {
    type Output = Vec<LeaderboardEntry>;
}
