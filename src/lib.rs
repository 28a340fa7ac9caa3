//! Esquie server
//!
//! Greets the visitor, then serves random quote/image pairings through
//! `GET /api/random`, alongside the page and its static assets.

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
