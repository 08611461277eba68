//! File-based preference store
//!
//! Persists the whole key-value map as one JSON object file in the app data
//! directory. A missing file reads as an empty store; every mutation rewrites
//! the file atomically (write to a temp file, then rename), so each
//! individual `set` is last-write-wins even if the process dies mid-write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use ll_core::ports::PreferenceStorePort;

pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create preference dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read preferences failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse preferences failed: {}", self.path.display()))
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(map).context("serialize preferences failed")?;
        self.atomic_write(&content).await
    }

    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .await
                .with_context(|| format!("remove preferences failed: {}", self.path.display()))?;
        }
        Ok(())
    }
}
