use std::sync::Arc;
use std::time::Instant;

/// One completed request, ready to be folded into the aggregate metrics.
///
/// Built once when a handler returns and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    /// HTTP verb, e.g. `GET`.
    pub method: String,

    /// Matched route template, e.g. `/health`.
    pub route: String,

    /// Final HTTP status code returned by the handler.
    pub status: u16,

    /// Wall-clock handler time in seconds. Never negative.
    pub duration: f64,
}

impl MetricSample {
    /// Build a sample whose duration is the time elapsed since `start`.
    ///
    /// `Instant` is monotonic, so the resulting duration is always `>= 0`.
    pub fn since(start: Instant, method: &str, route: &str, status: u16) -> Self {
        // ---
        Self {
            method: method.to_string(),
            route: route.to_string(),
            status,
            duration: start.elapsed().as_secs_f64(),
        }
    }
}

/// Abstraction for application metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> anyhow::Result<String>;

    /// Count the request under `(method, route, status)` and record its
    /// latency under `(method, route)`.
    fn record_http_request(&self, sample: &MetricSample);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
