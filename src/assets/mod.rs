//! Asset store module
//!
//! The fixed set of files the server hands out byte-for-byte: images,
//! stylesheet, client script, and the optional JSON content files.

mod dir;
mod memory;

pub use dir::DirAssetStore;
pub use memory::MemoryAssetStore;

use async_trait::async_trait;
use hyper::body::Bytes;

use crate::error::AssetError;
use crate::http::mime;

/// A file fetched from an asset store
#[derive(Debug, Clone)]
pub struct Asset {
    pub body: Bytes,
    pub content_type: &'static str,
}

impl Asset {
    /// Build an asset, inferring the content type from the path extension
    pub fn new(path: &str, body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            content_type: mime::content_type_for_path(path),
        }
    }
}

/// Read-only source of static files, addressed by URL-style path
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Fetch the asset at `path` (leading slash optional)
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError>;
}

/// Normalize a request path to a store-relative key
///
/// Each segment is percent-decoded. Returns `None` for anything that tries to
/// leave the store root, including an encoded separator or invalid UTF-8.
pub fn normalize_path(path: &str) -> Option<String> {
    let trimmed = path.trim_start_matches('/');
    let mut parts = Vec::new();
    for raw in trimmed.split('/') {
        let segment = urlencoding::decode(raw).ok()?;
        match segment.as_ref() {
            "" | "." => {}
            ".." => return None,
            s if s.contains(['/', '\\', '\0']) => return None,
            _ => parts.push(segment.into_owned()),
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
