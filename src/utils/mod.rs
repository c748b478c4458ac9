//! Utility functions and helpers for the lulimi service.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and log-safe text previews.
//! - `retry`: Retry with backoff for transient inference backend failures.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod retry;
