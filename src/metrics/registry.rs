// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of HTTP API requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of API requests"),
        &["endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // TRANSLATION METRICS
    // ============================================================================

    /// Completed translation attempts
    pub static ref TRANSLATIONS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translations_total", "Total translation requests by route and outcome"),
        &["route", "outcome"], // route: direct, pivot, none
        REGISTRY
    ).unwrap();

    /// End-to-end translation latency
    pub static ref TRANSLATION_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("translation_duration_seconds", "Translation latency in seconds")
            .buckets(vec![0.01, 0.05, 0.1, 0.2, 0.3, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["route"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // INFERENCE METRICS
    // ============================================================================

    /// One per routing hop; an adapter's internal retries count once
    pub static ref INFERENCE_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("inference_calls_total", "Total inference backend calls"),
        &["backend", "status"],
        REGISTRY
    ).unwrap();

    /// Inference call latency
    pub static ref INFERENCE_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("inference_duration_seconds", "Inference backend call duration")
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["backend"],
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        TRANSLATIONS_TOTAL.with_label_values(&["direct", "success"]).inc();
        INFERENCE_CALLS.with_label_values(&["simulated", "success"]).inc();
        REQUESTS_TOTAL.with_label_values(&["/api/v1/status", "200"]).inc();

        let metrics = gather_metrics();
        assert!(metrics.contains("translations_total"));
        assert!(metrics.contains("inference_calls_total"));
        assert!(metrics.contains("requests_total"));
    }
}
