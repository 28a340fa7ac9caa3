//! In-memory asset store

use async_trait::async_trait;
use hyper::body::Bytes;
use std::collections::HashMap;

use super::{normalize_path, Asset, AssetStore};
use crate::error::AssetError;

/// Asset store holding its files in a map, keyed by normalized path
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    files: HashMap<String, Bytes>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content at the same path
    #[must_use]
    pub fn with_file(mut self, path: &str, body: impl Into<Bytes>) -> Self {
        self.insert(path, body);
        self
    }

    pub fn insert(&mut self, path: &str, body: impl Into<Bytes>) {
        if let Some(key) = normalize_path(path) {
            self.files.insert(key, body.into());
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError> {
        let key = normalize_path(path).ok_or_else(|| AssetError::Rejected(path.to_string()))?;
        self.files
            .get(&key)
            .map(|body| Asset::new(&key, body.clone()))
            .ok_or(AssetError::NotFound(key))
    }
}
