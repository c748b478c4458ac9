// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics, INFERENCE_CALLS, INFERENCE_DURATION, REQUESTS_TOTAL, TRANSLATIONS_TOTAL,
    TRANSLATION_DURATION,
};

/// Helper to record HTTP request metrics
pub fn record_request(endpoint: &str, status_code: u16) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, &status_code.to_string()])
        .inc();
}

/// Helper to record a finished translation.
/// `route` is `"none"` when the request failed validation.
pub fn record_translation(route: &str, outcome: &str, duration_secs: f64) {
    TRANSLATIONS_TOTAL.with_label_values(&[route, outcome]).inc();

    if outcome == "success" {
        TRANSLATION_DURATION
            .with_label_values(&[route])
            .observe(duration_secs);
    }
}

/// Helper to record inference backend calls
pub fn record_inference_call(backend: &str, status: &str, duration_secs: f64) {
    INFERENCE_CALLS.with_label_values(&[backend, status]).inc();

    INFERENCE_DURATION
        .with_label_values(&[backend])
        .observe(duration_secs);
}
