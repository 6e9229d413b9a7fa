//! File-backed client storage
//!
//! All keys live in one JSON object in the application data directory, the
//! same flat namespace the web client had in local storage. Every write
//! rewrites the whole file atomically (temp file + rename).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use sl_core::ports::{ClientStoragePort, StorageError};
use sl_core::StorageKey;

pub const DEFAULT_STORE_FILE: &str = "client_storage.json";

pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `<base_dir>/client_storage.json`.
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join(DEFAULT_STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create storage dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Raw file content, `None` when the file does not exist.
    async fn read_content(&self) -> Result<Option<String>> {
        let exists = fs::try_exists(&self.path)
            .await
            .with_context(|| format!("check storage file failed: {}", self.path.display()))?;
        if !exists {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read storage file failed: {}", self.path.display()))?;
        Ok(Some(content))
    }

    fn parse_map(&self, content: &str) -> Result<BTreeMap<String, String>> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(content)
            .with_context(|| format!("parse storage file failed: {}", self.path.display()))
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match self.read_content().await? {
            Some(content) => self.parse_map(&content),
            None => Ok(BTreeMap::new()),
        }
    }

    async fn atomic_write(&self, map: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_parent_dir().await?;

        let content = serde_json::to_string_pretty(map).context("serialize storage failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp storage failed: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp storage to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;
        Ok(())
    }

    /// Current map for a write. An unparseable file is replaced rather than
    /// blocking every later write; a file that cannot be read at all fails
    /// the write and is left untouched.
    async fn map_for_update(&self) -> Result<BTreeMap<String, String>> {
        let Some(content) = self.read_content().await? else {
            return Ok(BTreeMap::new());
        };
        match self.parse_map(&content) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "Client storage corrupt, starting from empty");
                Ok(BTreeMap::new())
            }
        }
    }

    async fn update(
        &self,
        key: StorageKey,
        apply: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.map_for_update().await.map_err(io_error)?;
        apply(&mut map);
        self.atomic_write(&map).await.map_err(io_error)?;
        debug!(key = %key, path = %self.path.display(), "client storage updated");
        Ok(())
    }
}

fn io_error(err: anyhow::Error) -> StorageError {
    StorageError::Io(format!("{err:#}"))
}

#[async_trait]
impl ClientStoragePort for JsonFileStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        let map = self.read_map().await.map_err(io_error)?;
        Ok(map.get(key.as_str()).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.update(key, |map| {
            map.insert(key.as_str().to_string(), value.to_string());
        })
        .await
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.update(key, |map| {
            map.remove(key.as_str());
        })
        .await
    }
}
