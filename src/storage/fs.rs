//! File-backed key-value storage.
//!
//! Stores each key as its own JSON text file inside a base directory,
//! following platform conventions for where application data lives:
//!
//! - Linux: `$XDG_CONFIG_HOME/glimpse/store` or `~/.config/glimpse/store`
//! - macOS: `~/Library/Application Support/glimpse/store`
//! - Windows: `%LOCALAPPDATA%\glimpse\store`

use crate::constants;
use crate::errors::{StorageError, StorageResult};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// [`KeyValueStore`] adapter that keeps one file per key on disk.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        FileStore {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a store in the platform-conventional application data
    /// directory, falling back to the current directory when the platform
    /// reports no home.
    pub fn in_user_data_dir() -> Self {
        let base_dir = directories::ProjectDirs::from("", "", constants::APP_NAME)
            .map(|dirs| dirs.config_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("store");
        FileStore::new(base_dir)
    }

    /// Returns the directory the store writes into.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.base_dir).await?;
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("@glimpse_entries").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store"));

        store.set("@glimpse_profile", r#"{"name":"Ada"}"#).await.unwrap();
        assert_eq!(
            store.get("@glimpse_profile").await.unwrap().as_deref(),
            Some(r#"{"name":"Ada"}"#)
        );

        store.remove("@glimpse_profile").await.unwrap();
        assert_eq!(store.get("@glimpse_profile").await.unwrap(), None);

        // Removing twice is still fine.
        store.remove("@glimpse_profile").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }
}
