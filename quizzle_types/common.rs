use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key holding the opaque session credential.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the display identity.
pub const USERNAME_KEY: &str = "username";

/// Navigation parameter carrying the final score of a quiz.
pub const TOTAL_POINTS_PARAM: &str = "totalPoints";

/// Navigation parameter carrying the category the quiz was played in.
pub const CATEGORY_ID_PARAM: &str = "categoryId";

/// Outcome of a finished quiz, handed over by the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub points: u32,
    /// `0` means "All" / uncategorized.
    pub category_id: u32,
}

impl GameResult {
    pub fn new(points: u32, category_id: u32) -> Self {
        Self {
            points,
            category_id,
        }
    }

    /// Builds a result out of the key-value parameters passed along with the
    /// game-over navigation. Returns `None` until both values are present
    /// and numeric.
    pub fn from_params(params: &HashMap<String, String>) -> Option<Self> {
        let points = parse_param(params, TOTAL_POINTS_PARAM)?;
        let category_id = parse_param(params, CATEGORY_ID_PARAM)?;
        Some(Self::new(points, category_id))
    }
}

/// Reads the leading digits of a parameter, so `"42.0"` and `"42 pts"` both
/// yield `42`. A value with no leading digit is treated as absent.
fn parse_param(params: &HashMap<String, String>, key: &str) -> Option<u32> {
    let value = params.get(key)?.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse::<u32>().ok()
}

/// The player as known by the local identity store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

impl Identity {
    /// Returns `None` for an empty (or blank) username, which the store
    /// treats as "not logged in".
    pub fn new(username: impl Into<String>) -> Option<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return None;
        }
        Some(Self { username })
    }
}
