//! Axum-based HTTP server for the lulimi translation API.
//!
//! This is the transport boundary: it deserializes request bodies into
//! [`TranslationRequest`](crate::router::TranslationRequest), hands them to
//! the router, and maps failures to HTTP status codes.
//!
//! # Components
//!
//! - `handlers`: Individual endpoints (translate, status, languages, health, metrics).
//! - `middleware`: Request ID, CORS and request metrics layers.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
