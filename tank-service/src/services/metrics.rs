//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// This must be called once at startup before any metrics are recorded.
/// Panics if called more than once.
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }
}

/// Get the current metrics in Prometheus text format.
///
/// Returns a string suitable for the /metrics HTTP endpoint.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Record a handled API request by operation and outcome.
pub fn record_request(operation: &'static str, outcome: &'static str) {
    metrics::counter!(
        "tank_api_requests_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

/// Count a failed exit under the request counter while passing the error
/// through, for use with `map_err` on the error path.
pub fn record_error<E>(operation: &'static str) -> impl FnOnce(E) -> E {
    move |e| {
        record_request(operation, "error");
        e
    }
}
