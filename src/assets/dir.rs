//! Directory-backed asset store

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{normalize_path, Asset, AssetStore};
use crate::error::AssetError;
use crate::logger;

/// Serves files from a directory on disk
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetStore for DirAssetStore {
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError> {
        let relative =
            normalize_path(path).ok_or_else(|| AssetError::Rejected(path.to_string()))?;

        let root = fs::canonicalize(&self.root).await.map_err(|e| {
            AssetError::Unavailable(format!("{}: {e}", self.root.display()))
        })?;

        // File not found is common (404), no need to log
        let file_path = match fs::canonicalize(root.join(&relative)).await {
            Ok(p) => p,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AssetError::NotFound(relative));
            }
            Err(e) => {
                return Err(AssetError::Io {
                    path: relative,
                    source: e,
                })
            }
        };

        // Symlinks may still point outside the root
        if !file_path.starts_with(&root) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {path} -> {}",
                file_path.display()
            ));
            return Err(AssetError::Rejected(path.to_string()));
        }

        let is_file = fs::metadata(&file_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(AssetError::NotFound(relative));
        }

        let body = fs::read(&file_path).await.map_err(|e| AssetError::Io {
            path: relative.clone(),
            source: e,
        })?;

        Ok(Asset::new(&relative, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/esquie1.jpg"), b"\xff\xd8jpeg").unwrap();

        let store = DirAssetStore::new(dir.path());
        let asset = store.fetch("/images/esquie1.jpg").await.unwrap();
        assert_eq!(&asset.body[..], b"\xff\xd8jpeg");
        assert_eq!(asset.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path());
        let err = store.fetch("/images/esquie99.jpg").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        let store = DirAssetStore::new(dir.path());
        assert!(store.fetch("/images").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path().join("public"));
        let err = store.fetch("/../secret.txt").await.unwrap_err();
        assert!(matches!(err, AssetError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_missing_root_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path().join("nope"));
        let err = store.fetch("/quotes.json").await.unwrap_err();
        assert!(matches!(err, AssetError::Unavailable(_)));
        assert!(!err.is_not_found());
    }
}
