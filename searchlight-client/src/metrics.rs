//! Client observability metrics
//!
//! Emits request counters and duration histograms through the `metrics`
//! facade. Applications choose the exporter; without one installed these
//! calls are no-ops.

use std::time::{Duration, Instant};

/// Record request duration
pub fn record_request_duration(endpoint: &str, method: &str, duration: Duration) {
    metrics::histogram!(
        "searchlight_client_request_duration_seconds",
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record request success
pub fn record_request_success(endpoint: &str, method: &str) {
    metrics::counter!(
        "searchlight_client_requests_total",
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "status" => "ok",
    )
    .increment(1);
}

/// Record request error
pub fn record_request_error(endpoint: &str, method: &str, error_type: &str) {
    metrics::counter!(
        "searchlight_client_requests_total",
        "endpoint" => endpoint.to_string(),
        "method" => method.to_string(),
        "status" => "error",
    )
    .increment(1);

    metrics::counter!(
        "searchlight_client_request_errors_total",
        "endpoint" => endpoint.to_string(),
        "error_type" => error_type.to_string(),
    )
    .increment(1);
}

/// Guard for timing dispatched requests
pub struct RequestTimer {
    endpoint: String,
    method: String,
    start: Instant,
}

impl RequestTimer {
    /// Start timing a request
    pub fn new(endpoint: &str, method: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            start: Instant::now(),
        }
    }

    /// Record success and duration
    pub fn success(self) {
        let duration = self.start.elapsed();
        record_request_duration(&self.endpoint, &self.method, duration);
        record_request_success(&self.endpoint, &self.method);
    }

    /// Record error and duration
    pub fn error(self, error_type: &str) {
        let duration = self.start.elapsed();
        record_request_duration(&self.endpoint, &self.method, duration);
        record_request_error(&self.endpoint, &self.method, error_type);
    }
}
