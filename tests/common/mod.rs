#![allow(dead_code)]

use async_trait::async_trait;
use esquie::assets::{Asset, AssetStore, MemoryAssetStore};
use esquie::config::{AppState, Config};
use esquie::error::AssetError;
use esquie::handler::handle_request;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::net::SocketAddr;
use std::sync::Arc;

/// Store whose every fetch fails as if the backing source were down
pub struct FailingStore;

#[async_trait]
impl AssetStore for FailingStore {
    async fn fetch(&self, path: &str) -> Result<Asset, AssetError> {
        Err(AssetError::Unavailable(format!("simulated outage for {path}")))
    }
}

pub fn state_with(store: impl AssetStore + 'static) -> Arc<AppState> {
    let mut config = Config::defaults().expect("default config");
    config.logging.access_log = false;
    Arc::new(AppState::new(config, Arc::new(store)))
}

/// Store with the page assets but no content JSON files
pub fn asset_store() -> MemoryAssetStore {
    MemoryAssetStore::new()
        .with_file("/styles.css", ":root { --color-primary: #f4c27a; }")
        .with_file("/script.js", "function handleYesClick() {}")
        .with_file("/images/esquie1.jpg", Bytes::from_static(b"\xff\xd8\xff\xe0esquie1"))
}

pub fn peer() -> SocketAddr {
    "127.0.0.1:50000".parse().expect("peer addr")
}

pub async fn send(state: &Arc<AppState>, req: Request<()>) -> (Response<()>, Bytes) {
    let resp = handle_request(req, Arc::clone(state), peer())
        .await
        .expect("infallible");
    split(resp).await
}

pub async fn get(state: &Arc<AppState>, path: &str) -> (Response<()>, Bytes) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(())
        .expect("request");
    send(state, req).await
}

async fn split(resp: Response<Full<Bytes>>) -> (Response<()>, Bytes) {
    let (parts, body) = resp.into_parts();
    let bytes = body.collect().await.expect("collect body").to_bytes();
    (Response::from_parts(parts, ()), bytes)
}

pub fn header<'a>(resp: &'a Response<()>, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Whether `image` looks like `esquieN.jpg` with N in 1..=6
pub fn is_default_image(image: &str) -> bool {
    image
        .strip_prefix("esquie")
        .and_then(|rest| rest.strip_suffix(".jpg"))
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=6).contains(&n))
}
