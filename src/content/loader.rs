//! Optional content loading with built-in fallbacks
//!
//! Nothing in here returns an error to its caller: any failure to fetch or
//! parse a content file is logged and replaced by the built-in data.

use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::future::Future;

use super::defaults::FALLBACK_QUOTES;
use super::style::ImageConfig;
use crate::assets::AssetStore;
use crate::error::LoadError;
use crate::logger;

/// Run `loader`, returning `default()` if it fails
///
/// `what` names the resource in the log line.
pub async fn load_with_fallback<T, E, Fut, D>(what: &str, loader: Fut, default: D) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    D: FnOnce() -> T,
{
    match loader.await {
        Ok(value) => value,
        Err(e) => {
            logger::log_fallback(what, &e);
            default()
        }
    }
}

/// Fetch and parse a JSON document from the store
pub async fn fetch_json<T: DeserializeOwned>(
    store: &dyn AssetStore,
    path: &str,
) -> Result<T, LoadError> {
    let asset = store.fetch(path).await?;
    serde_json::from_slice(&asset.body).map_err(|source| LoadError::Malformed {
        path: path.to_string(),
        source,
    })
}

/// Load the quote list, dropping blank entries
pub async fn fetch_quotes(store: &dyn AssetStore, path: &str) -> Result<Vec<String>, LoadError> {
    let quotes: Vec<String> = fetch_json(store, path).await?;
    let quotes: Vec<String> = quotes
        .into_iter()
        .filter(|q| !q.trim().is_empty())
        .collect();
    if quotes.is_empty() {
        return Err(LoadError::Empty(path.to_string()));
    }
    Ok(quotes)
}

/// Quotes from the store, or the built-in list
pub async fn load_quotes(store: &dyn AssetStore, path: &str) -> Vec<String> {
    load_with_fallback("quotes", fetch_quotes(store, path), fallback_quotes).await
}

/// Image styling from the store, or the built-in map
pub async fn load_image_config(store: &dyn AssetStore, path: &str) -> ImageConfig {
    load_with_fallback(
        "image config",
        fetch_json::<ImageConfig>(store, path),
        ImageConfig::builtin,
    )
    .await
}

pub fn fallback_quotes() -> Vec<String> {
    FALLBACK_QUOTES.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetStore;

    #[tokio::test]
    async fn test_fallback_on_error() {
        let value = load_with_fallback("number", async { Err::<u32, _>("boom") }, || 7).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_loader_value_wins() {
        let value = load_with_fallback("number", async { Ok::<_, String>(3) }, || 7).await;
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_quotes_from_store() {
        let store = MemoryAssetStore::new().with_file("quotes.json", r#"["a", "  ", "b"]"#);
        let quotes = load_quotes(&store, "quotes.json").await;
        assert_eq!(quotes, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_quotes_missing_falls_back() {
        let store = MemoryAssetStore::new();
        assert_eq!(load_quotes(&store, "quotes.json").await, fallback_quotes());
    }

    #[tokio::test]
    async fn test_quotes_malformed_falls_back() {
        let store = MemoryAssetStore::new().with_file("quotes.json", "{not json");
        assert_eq!(load_quotes(&store, "quotes.json").await, fallback_quotes());

        let store = MemoryAssetStore::new().with_file("quotes.json", r#"{"a": 1}"#);
        assert_eq!(load_quotes(&store, "quotes.json").await, fallback_quotes());
    }

    #[tokio::test]
    async fn test_quotes_empty_array_falls_back() {
        let store = MemoryAssetStore::new().with_file("quotes.json", "[]");
        let err = fetch_quotes(&store, "quotes.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Empty(_)));
        assert_eq!(load_quotes(&store, "quotes.json").await, fallback_quotes());
    }

    #[tokio::test]
    async fn test_image_config_from_store_and_fallback() {
        let store = MemoryAssetStore::new().with_file(
            "image-config.json",
            r#"{"esquie3.jpg": {"objectFit": "contain", "objectPosition": "top"}}"#,
        );
        let config = load_image_config(&store, "image-config.json").await;
        assert_eq!(config.len(), 1);
        assert_eq!(config.style_for("esquie3.jpg").object_position, "top");

        let config = load_image_config(&MemoryAssetStore::new(), "image-config.json").await;
        assert_eq!(config, ImageConfig::builtin());
    }

    #[tokio::test]
    async fn test_image_config_partial_entry_is_not_discarded() {
        let store = MemoryAssetStore::new().with_file(
            "image-config.json",
            r#"{"esquie2.jpg": {"objectFit": "fill"}, "esquie5.jpg": {"objectFit": "contain"}}"#,
        );
        let config = load_image_config(&store, "image-config.json").await;
        assert_ne!(config, ImageConfig::builtin());
        assert_eq!(config.style_for("esquie2.jpg").object_fit, "fill");
        assert_eq!(config.style_for("esquie5.jpg").object_position, "center center");
    }
}
