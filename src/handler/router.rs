//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, body size
//! check, route dispatch, and access logging.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, SERVER};
use hyper::http::request::Parts;
use hyper::{HeaderMap, Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::{api, page, static_files};
use crate::config::{AppState, HealthConfig};
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Path of the random combination endpoint
pub const RANDOM_PATH: &str = "/api/random";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<&'a str>,
}

/// Main entry point for HTTP request handling
///
/// Only headers are inspected, so any body type is accepted and the body is
/// dropped unread.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (req, body) = req.into_parts();
    drop(body);
    let method = &req.method;
    let path = req.uri.path();

    let mut response = match check_http_method(method, state.config.http.enable_cors) {
        Some(resp) => resp,
        None => match check_body_size(&req.headers, state.config.http.max_body_size) {
            Some(resp) => resp,
            None => {
                let ctx = RequestContext {
                    path,
                    is_head: *method == Method::HEAD,
                    if_none_match: req
                        .headers
                        .get("if-none-match")
                        .and_then(|v| v.to_str().ok()),
                };
                route_request(&ctx, &state).await
            }
        },
    };

    if let Ok(server) = HeaderValue::from_str(&state.config.http.server_name) {
        response.headers_mut().insert(SERVER, server);
    }

    if state.access_log_enabled() {
        log_access(&req, &response, peer_addr, started, &state);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let value = headers.get("content-length")?;
    let Ok(size_str) = value.to_str() else {
        logger::log_warning("Content-Length header contains non-ASCII characters");
        return None;
    };
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Ok(_) => None,
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
    }
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if let Some(resp) = health_response(ctx, &state.config.health) {
        return resp;
    }

    match ctx.path {
        "/" => page::serve_index(ctx, state).await,
        RANDOM_PATH => api::serve_random(ctx, state).await,
        _ => static_files::serve_asset(ctx, state.assets.as_ref()).await,
    }
}

fn health_response(
    ctx: &RequestContext<'_>,
    health: &HealthConfig,
) -> Option<Response<Full<Bytes>>> {
    let is_probe = ctx.path == health.liveness_path || ctx.path == health.readiness_path;
    if health.enabled && is_probe {
        return Some(http::build_health_response("ok", ctx.is_head));
    }
    None
}

fn log_access(
    req: &Parts,
    response: &Response<Full<Bytes>>,
    peer_addr: SocketAddr,
    started: Instant,
    state: &AppState,
) {
    let header = |name: &str| {
        req.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method.to_string(),
        req.uri.path().to_string(),
    );
    entry.query = req.uri.query().map(ToString::to_string);
    entry.http_version = version_label(req.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
