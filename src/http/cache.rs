//! HTTP cache control module
//!
//! `ETag` generation for static assets and the `Cache-Control` policies used
//! by each kind of response.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Quoted `ETag` for the given content, e.g. `"abc123def"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Whether the client's `If-None-Match` matches `etag` (list and `*` allowed)
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .map(str::trim)
            .any(|e| e == etag || e == "*" || e.strip_prefix("W/") == Some(etag))
    })
}

/// Cache policy for a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Shared caches may keep it for the given seconds
    Public(u32),
    /// Must not be stored; every combination is fresh
    NoStore,
    /// May be stored but must be revalidated
    NoCache,
}

impl CachePolicy {
    /// Static files: images, stylesheet, script
    pub const STATIC: Self = Self::Public(3600);

    pub fn to_header_value(self) -> String {
        match self {
            Self::Public(max_age) => format!("public, max-age={max_age}"),
            Self::NoStore => "no-store".to_string(),
            Self::NoCache => "no-cache".to_string(),
        }
    }
}
