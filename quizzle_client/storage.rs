use async_trait::async_trait;
use std::{collections::HashMap, io::ErrorKind, path::PathBuf};
use tokio::sync::Mutex;

use quizzle_app::repository::IdentityRepository;
use quizzle_types::errors::{ApplicationError, IdentityError};

/// Local key-value store kept as a JSON object in a single file.
pub struct FileIdentityStore {
    path: PathBuf,
    // Serializes read-modify-write cycles of `set`.
    write_lock: Mutex<()>,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<HashMap<String, String>, IdentityError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| IdentityError::Storage(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(IdentityError::Storage(e.to_string())),
        }
    }

    async fn persist(&self, values: &HashMap<String, String>) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| IdentityError::Storage(e.to_string()))?;
        }

        let bytes =
            serde_json::to_vec_pretty(values).map_err(|e| IdentityError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| IdentityError::Storage(e.to_string()))
    }
}

#[async_trait]
impl IdentityRepository for FileIdentityStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let mut values = self.load().await?;
        Ok(values.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values).await?;

        tracing::debug!(key, path = %self.path.display(), "Stored identity value");
        Ok(())
    }
}
