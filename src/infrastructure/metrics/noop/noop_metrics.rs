use crate::domain::{MetricSample, Metrics};

/// No-op metrics implementation for testing.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Default for NoopMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> anyhow::Result<String> {
        Ok(String::new())
    }
    fn record_http_request(&self, _: &MetricSample) {}
}
