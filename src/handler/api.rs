//! Random combination endpoint

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use std::sync::Arc;

use super::router::RequestContext;
use crate::config::AppState;
use crate::content::{self, IMAGES};
use crate::http;
use crate::logger;

/// `GET /api/random`: one fresh `{quote, image}` pair
///
/// Quote loading never fails from the caller's point of view, so this always
/// answers 200 unless the built-in lists themselves are empty.
pub async fn serve_random(
    ctx: &RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let quotes =
        content::load_quotes(state.assets.as_ref(), &state.config.content.quotes_path).await;

    match content::select_combination(&quotes, &IMAGES) {
        Ok(combination) => http::build_json_response(StatusCode::OK, &combination, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Cannot build combination: {e}"));
            http::build_json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &serde_json::json!({ "error": "Internal server error" }),
                ctx.is_head,
            )
        }
    }
}
