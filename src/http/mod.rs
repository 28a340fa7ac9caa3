//! HTTP protocol layer module
//!
//! Response builders, cache validators and MIME detection, independent of
//! what the routes actually serve.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_asset_response, build_health_response, build_html_response, build_json_response,
    build_options_response, build_text_response,
};
