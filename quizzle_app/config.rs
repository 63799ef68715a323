use dotenvy::dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_API_URL: &str = "https://quizzleapp.lm.r.appspot.com";
pub const DEFAULT_STORAGE_PATH: &str = ".quizzle/storage.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the scoring backend, without trailing slash.
    pub api_url: String,
    /// File backing the local identity store.
    pub storage_path: PathBuf,
}

impl Config {
    pub fn new(api_url: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            storage_path: storage_path.into(),
        }
    }

    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = match env::var("QUIZZLE_API_URL") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => DEFAULT_API_URL.to_string(),
        };

        let storage_path = match env::var("QUIZZLE_STORAGE_PATH") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => DEFAULT_STORAGE_PATH.to_string(),
        };

        Self::new(api_url, storage_path)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
