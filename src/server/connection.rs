// Connection handling module
// Accepts a single TCP connection and serves it over HTTP/1

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::{AppState, PerformanceConfig};
use crate::handler;
use crate::logger;

/// Holds one slot of the active-connection counter, released on drop
struct ConnectionSlot(Arc<AtomicUsize>);

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Accept and process a connection, enforcing the connection limit.
///
/// Returns `false` if the connection was rejected.
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) -> bool {
    // Increment first, then check, so concurrent accepts cannot overshoot
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);
    let slot = ConnectionSlot(Arc::clone(conn_counter));

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return false;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state), slot);
    true
}

/// Serve a connection in a spawned task, bounded by the configured timeout
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    slot: ConnectionSlot,
) {
    tokio::spawn(async move {
        let _slot = slot;
        let io = TokioIo::new(stream);

        let perf = &state.config.performance;
        let timeout_duration = connection_timeout(perf);

        let mut builder = http1::Builder::new();
        builder.keep_alive(keep_alive_enabled(perf));

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                handler::handle_request(req, Arc::clone(&service_state), peer_addr)
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }
    });
}

/// `keep_alive_timeout = 0` turns keep-alive off; any other value turns it on
fn keep_alive_enabled(perf: &PerformanceConfig) -> bool {
    perf.keep_alive_timeout > 0
}

/// Whole-connection lifetime, keep-alive included: the larger of the read and
/// write timeouts, never under one second
fn connection_timeout(perf: &PerformanceConfig) -> Duration {
    Duration::from_secs(std::cmp::max(perf.read_timeout, perf.write_timeout).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perf(keep_alive: u64, read: u64, write: u64) -> PerformanceConfig {
        PerformanceConfig {
            keep_alive_timeout: keep_alive,
            read_timeout: read,
            write_timeout: write,
            max_connections: None,
        }
    }

    #[test]
    fn test_keep_alive_switch() {
        assert!(keep_alive_enabled(&perf(75, 30, 30)));
        assert!(keep_alive_enabled(&perf(1, 30, 30)));
        assert!(!keep_alive_enabled(&perf(0, 30, 30)));
    }

    #[test]
    fn test_connection_timeout_ignores_keep_alive_value() {
        assert_eq!(connection_timeout(&perf(75, 30, 10)), Duration::from_secs(30));
        assert_eq!(connection_timeout(&perf(5, 10, 45)), Duration::from_secs(45));
        assert_eq!(connection_timeout(&perf(75, 0, 0)), Duration::from_secs(1));
    }
}
