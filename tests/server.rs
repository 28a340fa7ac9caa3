mod common;

use common::{asset_store, is_default_image, state_with};
use esquie::server::{create_reusable_listener, start_server_loop};
use serde_json::Value;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

async fn raw_get(addr: SocketAddr, path: &str) -> (String, Vec<u8>) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();

    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    let head = String::from_utf8_lossy(&raw[..split]).to_ascii_lowercase();
    (head, raw[split + 4..].to_vec())
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = tokio::spawn(start_server_loop(listener, state_with(asset_store()), async {
        let _ = rx.await;
    }));

    let (head, body) = raw_get(addr, "/api/random").await;
    assert!(head.starts_with("http/1.1 200"), "{head}");
    assert!(head.contains("access-control-allow-origin: *"));
    assert!(head.contains("content-type: application/json"));
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert!(is_default_image(value["image"].as_str().unwrap()));
    assert!(!value["quote"].as_str().unwrap().is_empty());

    let (head, _) = raw_get(addr, "/images/esquie99.jpg").await;
    assert!(head.starts_with("http/1.1 404"), "{head}");

    tx.send(()).unwrap();
    server.await.unwrap();
}
