//! File-backed store.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use super::{SecureStore, StoreError};

/// A `SecureStore` persisted as one JSON document on disk.
///
/// Every operation is a full read-modify-write of the document under an
/// internal lock, which serializes calls from one process. There is no
/// cross-process coordination; like the platform secure store this assumes a
/// single foreground app.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStore {
    /// Create a store over `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::DataCorruption {
                key: self.path.display().to_string(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, doc: &HashMap<String, String>) -> Result<(), StoreError> {
        // Unwrap-free: a String map always serializes
        let raw = serde_json::to_string_pretty(doc).map_err(|e| StoreError::DataCorruption {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

impl SecureStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _held = self.guard.lock().await;
        let doc = self.read_document().await?;
        Ok(doc.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _held = self.guard.lock().await;
        let mut doc = self.read_document().await?;
        doc.insert(key.to_owned(), value.to_owned());
        self.write_document(&doc).await
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _held = self.guard.lock().await;
        let mut doc = self.read_document().await?;
        if doc.remove(key).is_some() {
            self.write_document(&doc).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");

        let store = FileStore::new(&path);
        store.set("userData", "{\"firstName\":\"A\"}").await.unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("userData").await.unwrap().as_deref(),
            Some("{\"firstName\":\"A\"}")
        );
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        let store = FileStore::new(&path);

        store.delete("missing").await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = FileStore::new(&path);
        let err = store.get("k").await.unwrap_err();
        assert!(matches!(err, StoreError::DataCorruption { .. }));
    }
}
