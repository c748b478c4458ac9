// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    health_handler, metrics_handler, status_handler, supported_languages_handler, translate_handler,
};
use super::middleware::{cors_layer, record_request_metrics, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::router::TranslationRouter;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub router: Arc<TranslationRouter>,
}

pub fn create_router(config: AppConfig, translation_router: TranslationRouter) -> Result<Router> {
    let state = AppState {
        config: Arc::new(config),
        router: Arc::new(translation_router),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/translate", post(translate_handler))
        .route("/api/v1/status", get(status_handler))
        .route("/api/v1/supported_languages", get(supported_languages_handler))
        .route_layer(middleware::from_fn(record_request_metrics))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
