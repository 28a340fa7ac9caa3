//! Error types
//!
//! Every error here is recoverable: content errors are configuration mistakes
//! caught at the selector boundary, asset and load errors are swallowed by the
//! fallback loaders.

use thiserror::Error;

/// Selector input rejected before any draw is made
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("quote collection is empty")]
    EmptyQuotes,
    #[error("image collection is empty")]
    EmptyImages,
}

/// Failure to fetch a file from the asset store
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("path rejected: {0}")]
    Rejected(String),
    #[error("failed to read asset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("asset store unavailable: {0}")]
    Unavailable(String),
}

impl AssetError {
    /// Whether this error maps to a plain 404 for clients
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Rejected(_))
    }
}

/// Failure to load a JSON document from the asset store
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("malformed JSON in '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("'{0}' contains no usable entries")]
    Empty(String),
}
