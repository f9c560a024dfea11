// src/infrastructure/metrics/noop/mod.rs
mod noop_metrics;

pub use noop_metrics::NoopMetrics;
use std::sync::Arc;

/// Creates a metrics backend that discards every request sample.
///
/// Selected with `APP_METRICS_TYPE=noop`; the exposition endpoints then
/// answer with an empty body.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Metrics recording disabled (noop backend)");
    Ok(Arc::new(NoopMetrics::new()))
}
