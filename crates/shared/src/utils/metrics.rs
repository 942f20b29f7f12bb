use prometheus_client::{
    metrics::{
        counter::Counter,
        family::Family,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use tokio::time::Instant;

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelSet)]
struct OperationLabels {
    operation: String,
    method: Method,
    status: Status,
}

fn duration_histogram() -> Histogram {
    Histogram::new(exponential_buckets(0.001, 2.0, 14))
}

/// Per-operation request counters and latencies shared by every service.
#[derive(Debug, Clone)]
pub struct Metrics {
    requests: Family<OperationLabels, Counter>,
    durations: Family<OperationLabels, Histogram, fn() -> Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            durations: Family::new_with_constructor(duration_histogram as fn() -> Histogram),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "service_requests",
            "Service operations by outcome",
            self.requests.clone(),
        );
        registry.register(
            "service_request_duration_seconds",
            "Service operation latency in seconds",
            self.durations.clone(),
        );
    }

    pub fn record(&self, operation: &str, method: Method, status: Status, elapsed: f64) {
        let labels = OperationLabels {
            operation: operation.to_string(),
            method,
            status,
        };

        self.requests.get_or_create(&labels).inc();
        self.durations.get_or_create(&labels).observe(elapsed);
    }

    /// Records the outcome of an operation that began at `started`.
    pub fn record_result<T, E>(
        &self,
        operation: &str,
        method: Method,
        started: Instant,
        result: &Result<T, E>,
    ) {
        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };

        self.record(
            operation,
            method,
            status,
            started.elapsed().as_secs_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn recorded_operations_show_up_in_exposition() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        metrics.record("login", Method::Post, Status::Success, 0.02);
        metrics.record("login", Method::Post, Status::Error, 0.01);

        let mut body = String::new();
        encode(&mut body, &registry).unwrap();

        assert!(body.contains("service_requests_total"));
        assert!(body.contains("operation=\"login\""));
        assert!(body.contains("status=\"Error\""));
    }
}
