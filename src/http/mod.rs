//! HTTP server module
//!
//! This module exposes the catalog over HTTP:
//! - Axum router with listing, playback and subtitle endpoints
//! - JSON request handlers backed by blocking filesystem work
//! - CORS and request tracing middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;

/// Route prefix under which library paths are browsed
pub const STREAM_ROUTE_PREFIX: &str = crate::content::STREAM_PREFIX;
