// Error types for the lulimi translation service
// Author: kelexine (https://github.com/kelexine)

use crate::inference::InferenceError;
use crate::languages::LanguageCode;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Position of an inference call within a routed translation.
///
/// A direct route only ever has a `First` hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    First,
    Second,
}

impl Hop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hop::First => "first",
            Hop::Second => "second",
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum LulimiError {
    #[error("Unsupported language code: {0:?}")]
    UnknownLanguage(String),

    #[error("Source and target languages cannot be the same ({0})")]
    IdenticalLanguages(LanguageCode),

    #[error("Input text cannot be empty")]
    EmptyInput,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Inference failed on {hop} hop ({source_lang} -> {target_lang}): {source}")]
    Inference {
        hop: Hop,
        source_lang: LanguageCode,
        target_lang: LanguageCode,
        #[source]
        source: InferenceError,
    },

    #[error("Translation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LulimiError {
    /// True for failures caused by the caller's input. These never reach
    /// the inference adapter.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LulimiError::UnknownLanguage(_)
                | LulimiError::IdenticalLanguages(_)
                | LulimiError::EmptyInput
                | LulimiError::InvalidRequest(_)
        )
    }

    /// The hop that failed, if this is an inference failure.
    pub fn failed_hop(&self) -> Option<Hop> {
        match self {
            LulimiError::Inference { hop, .. } => Some(*hop),
            _ => None,
        }
    }

    /// Short label used for metrics and the error body `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            LulimiError::UnknownLanguage(_) => "unknown_language",
            LulimiError::IdenticalLanguages(_) => "identical_languages",
            LulimiError::EmptyInput => "empty_input",
            LulimiError::InvalidRequest(_) => "invalid_request",
            LulimiError::Inference { .. } => "inference_failure",
            LulimiError::Cancelled => "cancelled",
            LulimiError::Config(_) | LulimiError::ConfigParsing(_) => "configuration",
            _ => "internal",
        }
    }
}

// Convert LulimiError to HTTP responses for Axum
impl IntoResponse for LulimiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            e if e.is_client_error() => (StatusCode::BAD_REQUEST, "invalid_request_error"),
            LulimiError::Inference { .. } => (StatusCode::BAD_GATEWAY, "inference_error"),
            LulimiError::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "cancelled"),
            LulimiError::Config(_) | LulimiError::ConfigParsing(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "api_error"),
        };

        let mut error = json!({
            "type": error_type,
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Some(hop) = self.failed_hop() {
            error["hop"] = json!(hop.as_str());
        }

        let body = json!({
            "type": "error",
            "error": error,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, LulimiError>;
