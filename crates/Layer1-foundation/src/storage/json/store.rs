//! JSON document store
//!
//! Whole-document persistence: every save overwrites the full file,
//! every load reads it back in one piece. There is no incremental
//! update path and no concurrency token; the last writer wins.

use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// JSON file store rooted at a base directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Global store under the platform data directory
    pub fn global() -> Result<Self> {
        let dir = dirs::data_local_dir()
            .ok_or_else(|| Error::Storage("Cannot find data directory".to_string()))?
            .join("tutorforge");
        Ok(Self::new(dir))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await.map_err(|e| {
            Error::Storage(format!(
                "Failed to create {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Load a document
    pub async fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<T> {
        let path = self.file_path(filename);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load a document, falling back to its default
    pub async fn load_or_default<T: DeserializeOwned + Default>(&self, filename: &str) -> T {
        self.load(filename).await.unwrap_or_default()
    }

    /// Load a document that may not exist yet
    pub async fn load_optional<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.file_path(filename);
        if !path.exists() {
            return Ok(None);
        }
        self.load(filename).await.map(Some)
    }

    /// Save a document, overwriting any previous content
    pub async fn save<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        self.ensure_dir().await?;
        let path = self.file_path(filename);
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| Error::Storage(format!("Failed to serialize: {}", e)))?;
        fs::write(&path, content)
            .await
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.file_path(filename).exists()
    }

    pub async fn remove(&self, filename: &str) -> Result<()> {
        let path = self.file_path(filename);
        if path.exists() {
            fs::remove_file(&path).await.map_err(|e| {
                Error::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}
