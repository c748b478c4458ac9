// Remote model server adapter
// Author: kelexine (https://github.com/kelexine)

use super::{InferenceAdapter, InferenceError};
use crate::config::InferenceConfig;
use crate::error::{LulimiError, Result};
use crate::languages::LanguageCode;
use crate::utils::retry::{parse_retry_after, with_retry};
use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, error};

#[derive(Debug, Serialize)]
struct ModelRequest<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModelResponse {
    #[serde(alias = "translated_text", alias = "translatedText")]
    translation: String,
}

/// Client for a translation model served over HTTP.
///
/// Sends one JSON request per hop and retries transient failures
/// (429, 5xx, timeouts, connection errors) with backoff.
pub struct HttpInferenceAdapter {
    http_client: Client,
    endpoint: String,
    api_key: Option<String>,
    max_attempts: u32,
}

impl HttpInferenceAdapter {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(LulimiError::Config(
                "inference.endpoint is required for the http backend".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| LulimiError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.to_string(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            max_attempts: config.max_retries.saturating_add(1),
        })
    }

    async fn send_once(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> std::result::Result<String, InferenceError> {
        let payload = ModelRequest {
            text,
            source_lang: source.as_str(),
            target_lang: target.as_str(),
        };

        let mut request = self.http_client.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout
            } else {
                InferenceError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_retry_after);
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Upstream {
                status: status.as_u16(),
                message: Self::extract_error_message(&message).unwrap_or(message),
                retry_after,
            });
        }

        let body: ModelResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        Ok(body.translation)
    }

    /// Pull a human-readable message out of `{"error": ...}` or
    /// `{"detail": ...}` bodies.
    fn extract_error_message(body: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        let field = json.get("error").or_else(|| json.get("detail"))?;
        match field {
            serde_json::Value::String(s) => Some(s.clone()),
            other => other.get("message")?.as_str().map(str::to_string),
        }
    }
}

#[async_trait]
impl InferenceAdapter for HttpInferenceAdapter {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> std::result::Result<String, InferenceError> {
        let started = Instant::now();
        let operation = format!("Model inference {} -> {}", source, target);

        let result = with_retry(&operation, self.max_attempts, || self.send_once(text, source, target)).await;

        match &result {
            Ok(_) => debug!("{} completed in {}ms", operation, started.elapsed().as_millis()),
            Err(e) => error!("{} failed: {}", operation, e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            HttpInferenceAdapter::extract_error_message(r#"{"error": {"message": "model not loaded"}}"#),
            Some("model not loaded".to_string())
        );
        assert_eq!(
            HttpInferenceAdapter::extract_error_message(r#"{"detail": "bad pair"}"#),
            Some("bad pair".to_string())
        );
        assert_eq!(HttpInferenceAdapter::extract_error_message("plain text"), None);
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let config = InferenceConfig {
            endpoint: "http://localhost:5000/translate".to_string(),
            api_key: Some(String::new()),
            ..Default::default()
        };
        let adapter = HttpInferenceAdapter::new(&config).unwrap();
        assert!(adapter.api_key.is_none());
        assert_eq!(adapter.max_attempts, 4);
    }
}
