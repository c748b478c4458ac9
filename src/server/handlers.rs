// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::LulimiError;
use crate::languages::Language;
use crate::router::{OperationalStatus, TranslationRequest, TranslationResult};
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, error};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub inference_backend: &'static str,
    pub languages: usize,
    pub pivot: String,
    pub timestamp: String,
}

/// Liveness probe. Reports wiring, not model health.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.router.registry();
    Json(HealthResponse {
        status: "healthy",
        inference_backend: state.router.adapter_name(),
        languages: registry.languages().len(),
        pivot: registry.pivot().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for POST /api/v1/translate
///
/// If the client disconnects, axum drops this future and with it any
/// in-flight inference call; no further hop is started.
pub async fn translate_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslationResult>, LulimiError> {
    let request: TranslationRequest = serde_json::from_str(&body).map_err(|e| {
        debug!("Rejected translation body: {}", e);
        LulimiError::InvalidRequest(format!("JSON deserialization error: {}", e))
    })?;

    let route = state
        .router
        .route_for(&request.source_lang, &request.target_lang)
        .map(|r| r.as_str())
        .unwrap_or("none");

    let started = Instant::now();
    match state.router.translate(request).await {
        Ok(result) => {
            crate::metrics::record_translation(route, "success", started.elapsed().as_secs_f64());
            Ok(Json(result))
        }
        Err(e) => {
            crate::metrics::record_translation(route, e.kind(), started.elapsed().as_secs_f64());
            if e.is_client_error() {
                debug!("Translation request rejected: {}", e);
            } else {
                error!("Translation failed: {}", e);
            }
            Err(e)
        }
    }
}

/// Handler for GET /api/v1/status
pub async fn status_handler(State(state): State<AppState>) -> Json<OperationalStatus> {
    Json(state.router.operational_status())
}

/// Handler for GET /api/v1/supported_languages
pub async fn supported_languages_handler(State(state): State<AppState>) -> Json<Vec<Language>> {
    Json(state.router.supported_languages().to_vec())
}

/// Handler for GET /metrics (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}
