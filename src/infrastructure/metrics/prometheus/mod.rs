mod counters;
mod prometheus_metrics;
mod recorder;

pub use counters::{REQUEST_COUNT, REQUEST_LATENCY};
pub use prometheus_metrics::PrometheusMetrics;
use prometheus::Registry;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{register_request_count, register_request_latency};
pub(crate) use recorder::render_registry;

/// Creates a new Prometheus metrics implementation backed by its own registry.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    // ---
    create_with_registry(Registry::new())
}

/// Creates a Prometheus metrics implementation on a caller-supplied registry.
///
/// Useful when the request families should sit next to other collectors
/// the caller already exposes.
pub fn create_with_registry(registry: Registry) -> anyhow::Result<crate::domain::MetricsPtr> {
    // ---
    tracing::info!("Initializing Prometheus metrics");

    Ok(Arc::new(PrometheusMetrics::new(registry)?))
}
