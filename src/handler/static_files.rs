//! Static file serving module
//!
//! Serves anything in the asset store byte-for-byte, with `ETag` revalidation.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::router::RequestContext;
use crate::assets::AssetStore;
use crate::http::{self, cache};
use crate::logger;

/// Serve the asset at the request path, or 404
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    store: &dyn AssetStore,
) -> Response<Full<Bytes>> {
    match store.fetch(ctx.path).await {
        Ok(asset) => {
            let etag = cache::generate_etag(&asset.body);
            if cache::check_etag_match(ctx.if_none_match, &etag) {
                return http::build_304_response(&etag);
            }
            http::build_asset_response(asset.body, asset.content_type, &etag, ctx.is_head)
        }
        Err(e) if e.is_not_found() => http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!("Failed to serve '{}': {e}", ctx.path));
            http::build_404_response()
        }
    }
}
