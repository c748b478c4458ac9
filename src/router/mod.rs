//! Translation routing engine.
//!
//! [`TranslationRouter`] validates a request against the language registry,
//! decides between a direct call and a two-hop pivot through the registry's
//! pivot language, drives the inference adapter accordingly, and times the
//! whole operation.
//!
//! Validation order is fixed:
//! 1. source code must be registered (`UnknownLanguage`)
//! 2. target code must be registered (`UnknownLanguage`)
//! 3. source and target must differ (`IdenticalLanguages`)
//! 4. trimmed text must be non-empty (`EmptyInput`)
//!
//! The router holds no per-request state, so one instance serves any number
//! of concurrent requests.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod types;

pub use types::{OperationalStatus, Route, RoutePlan, TranslationRequest, TranslationResult};

use crate::error::{Hop, LulimiError, Result};
use crate::inference::InferenceAdapter;
use crate::languages::{Language, LanguageCode, LanguageRegistry};
use crate::utils::logging::{preview, PREVIEW_CHARS};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Validated, canonical form of a request.
struct ValidatedRequest {
    text: String,
    source: LanguageCode,
    target: LanguageCode,
}

pub struct TranslationRouter {
    registry: Arc<LanguageRegistry>,
    adapter: Arc<dyn InferenceAdapter>,
}

impl TranslationRouter {
    pub fn new(registry: Arc<LanguageRegistry>, adapter: Arc<dyn InferenceAdapter>) -> Self {
        Self { registry, adapter }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }

    /// Translate `request`, running to completion.
    pub async fn translate(&self, request: TranslationRequest) -> Result<TranslationResult> {
        self.translate_with_cancel(request, &CancellationToken::new()).await
    }

    /// Translate `request`, aborting with [`LulimiError::Cancelled`] as soon
    /// as `cancel` fires. An in-flight hop is dropped and no later hop starts.
    pub async fn translate_with_cancel(
        &self,
        request: TranslationRequest,
        cancel: &CancellationToken,
    ) -> Result<TranslationResult> {
        let started = Instant::now();

        let ValidatedRequest { text, source, target } = self.validate(request)?;
        let plan = RoutePlan::new(&source, &target, self.registry.pivot());
        let route = plan.route();

        debug!(
            "Routing {} -> {} via {} route: {:?}",
            source,
            target,
            route,
            preview(&text, PREVIEW_CHARS)
        );

        // Strictly sequential: a hop starts only after the previous one
        // succeeded, and consumes its output.
        let mut translated = text;
        for (index, (from, to)) in plan.hops().iter().enumerate() {
            let hop = if index == 0 { Hop::First } else { Hop::Second };
            translated = self.hop(hop, &translated, from, to, cancel).await?;
        }

        let elapsed_millis = round_millis(started.elapsed());

        info!(
            route = route.as_str(),
            source_lang = %source,
            target_lang = %target,
            elapsed_ms = elapsed_millis,
            "Translation completed"
        );

        Ok(TranslationResult::new(translated, source, target, route, elapsed_millis))
    }

    /// Route a language pair would take, applying the same code checks as
    /// [`translate`](Self::translate) but without touching the adapter.
    pub fn route_for(&self, source_lang: &str, target_lang: &str) -> Result<Route> {
        let (source, target) = self.validate_pair(source_lang, target_lang)?;
        Ok(Route::select(&source, &target, self.registry.pivot()))
    }

    /// Supported languages in registry definition order.
    pub fn supported_languages(&self) -> &[Language] {
        self.registry.languages()
    }

    pub fn operational_status(&self) -> OperationalStatus {
        OperationalStatus::default()
    }

    fn validate(&self, request: TranslationRequest) -> Result<ValidatedRequest> {
        let (source, target) = self.validate_pair(&request.source_lang, &request.target_lang)?;

        let text = request.text.trim();
        if text.is_empty() {
            return Err(LulimiError::EmptyInput);
        }

        Ok(ValidatedRequest {
            text: text.to_string(),
            source,
            target,
        })
    }

    fn validate_pair(&self, source_lang: &str, target_lang: &str) -> Result<(LanguageCode, LanguageCode)> {
        let source = self.registry.canonicalize(source_lang)?;
        let target = self.registry.canonicalize(target_lang)?;

        if source == target {
            return Err(LulimiError::IdenticalLanguages(source));
        }

        Ok((source, target))
    }

    /// One adapter call, counted in `inference_calls_total` whatever the
    /// backend. Cancellation wins over a result that is ready at the same time.
    async fn hop(
        &self,
        hop: Hop,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
        cancel: &CancellationToken,
    ) -> Result<String> {
        if cancel.is_cancelled() {
            return Err(LulimiError::Cancelled);
        }

        let started = Instant::now();
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("{} hop {} -> {} cancelled", hop, source, target);
                crate::metrics::record_inference_call(
                    self.adapter.name(),
                    "cancelled",
                    started.elapsed().as_secs_f64(),
                );
                return Err(LulimiError::Cancelled);
            }
            result = self.adapter.translate(text, source, target) => result,
        };

        let status = match &result {
            Ok(_) => "success".to_string(),
            Err(e) => e.metric_label(),
        };
        crate::metrics::record_inference_call(self.adapter.name(), &status, started.elapsed().as_secs_f64());

        result.map_err(|e| {
            warn!("{} hop {} -> {} failed: {}", hop, source, target, e);
            LulimiError::Inference {
                hop,
                source_lang: source.clone(),
                target_lang: target.clone(),
                source: e,
            }
        })
    }
}

fn round_millis(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}
