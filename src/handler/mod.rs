//! Request handler module
//!
//! Routes requests to the page, the random combination API, health probes,
//! or the static asset store.

pub mod api;
pub mod page;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, RANDOM_PATH};
