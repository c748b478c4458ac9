//! Translation model backends.
//!
//! The router only sees [`InferenceAdapter`]: one call translates one text
//! in one direction between two registered languages. Which backend sits
//! behind it is decided once, at construction, by [`build_adapter`].
//!
//! # Backends
//!
//! - `simulated`: deterministic canned output after a fixed delay.
//! - `http`: a remote model server, with retries for transient failures.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod http;
mod simulated;

pub use http::HttpInferenceAdapter;
pub use simulated::SimulatedAdapter;

use crate::config::{InferenceBackend, InferenceConfig};
use crate::error::Result;
use crate::languages::{LanguageCode, LanguageRegistry};
use crate::utils::retry::{is_retryable_status, Retryable};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Failure of a single inference call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("model server returned {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("model call timed out")]
    Timeout,

    #[error("invalid model response: {0}")]
    InvalidResponse(String),

    #[error("model unavailable: {0}")]
    Unavailable(String),
}

impl InferenceError {
    /// `status` label for `inference_calls_total`.
    pub fn metric_label(&self) -> String {
        match self {
            InferenceError::Upstream { status, .. } => status.to_string(),
            InferenceError::Timeout => "timeout".to_string(),
            InferenceError::Unavailable(_) => "unavailable".to_string(),
            InferenceError::Transport(_) | InferenceError::InvalidResponse(_) => "error".to_string(),
        }
    }
}

impl Retryable for InferenceError {
    fn is_retryable(&self) -> bool {
        match self {
            InferenceError::Upstream { status, .. } => is_retryable_status(*status),
            InferenceError::Transport(_) | InferenceError::Timeout => true,
            InferenceError::InvalidResponse(_) | InferenceError::Unavailable(_) => false,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            InferenceError::Upstream { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// A single-hop, single-direction translation backend.
///
/// Implementations may suspend for as long as the model takes; they own
/// any retry policy. Callers never invoke an adapter with identical source
/// and target languages.
#[async_trait]
pub trait InferenceAdapter: Send + Sync {
    /// Short backend label used in logs, metrics and `/health`.
    fn name(&self) -> &'static str;

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> std::result::Result<String, InferenceError>;
}

/// Construct the adapter selected by `config.backend`.
pub fn build_adapter(
    config: &InferenceConfig,
    registry: Arc<LanguageRegistry>,
) -> Result<Arc<dyn InferenceAdapter>> {
    let adapter: Arc<dyn InferenceAdapter> = match config.backend {
        InferenceBackend::Simulated => Arc::new(SimulatedAdapter::new(
            registry,
            Duration::from_millis(config.simulated_latency_ms),
        )),
        InferenceBackend::Http => Arc::new(HttpInferenceAdapter::new(config)?),
    };

    info!("Using {} inference backend", adapter.name());
    Ok(adapter)
}
